mod ctx;
mod error;
mod roller;

use crate::common::Int;
use crate::config::RollConfig;
use crate::parse::ast;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use roller::{Roller, Rolls, SequenceRoller};

/// Evaluates `expr` once with `roller`, allowing at most `max_rolls` dice.
pub fn eval<R: Roller>(
    expr: &ast::Expression,
    roller: R,
    max_rolls: Option<usize>,
) -> RResult<Int> {
    let config = RollConfig::default().with_max_rolls(max_rolls);
    RollContext::new(config, roller).eval(expr)
}
