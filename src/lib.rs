//! Evaluates tabletop dice expressions such as `2d6+3`, `(1d20+5)*2` or `4d6kh`.
//!
//! ```
//! let value = dice_expr::roll("2d6 + 3").unwrap();
//! assert!((5..=15).contains(&value));
//! ```

pub mod command;
mod common;
pub mod config;
mod error;
pub mod parse;
pub mod roll;

pub use common::{BinaryOperator, Int, NonZeroUInt, Span, Spanned, UInt};
pub use config::RollConfig;
pub use error::Error;
pub use parse::{
    ast::{DiceMode, DiceSpec, Expression},
    parse, DiceNotationError, ParseError, ParseErrorKind,
};
pub use roll::{RollContext, RollError, Roller, SequenceRoller};

/// Parses and rolls `s` with the thread-local generator and no roll limit.
pub fn roll(s: &str) -> Result<Int, Error> {
    roll_with(s, &mut RollContext::default())
}

/// Parses `s` and evaluates it with `ctx`.
pub fn roll_with<R: Roller>(s: &str, ctx: &mut RollContext<R>) -> Result<Int, Error> {
    let expr = parse(s)?;
    Ok(ctx.eval(&expr)?)
}
