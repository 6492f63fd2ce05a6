pub mod ast;
mod builder;
mod error;
mod lexer;
mod postfix;

pub use builder::build;
pub use error::{DiceNotationError, ParseError, ParseErrorKind};
pub use lexer::{tokenize, Token};
pub use postfix::to_postfix;

/// Parses a dice expression such as `(1d20 + 5) * 2` into its tree.
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    let tokens = tokenize(s)?;
    let postfix = to_postfix(tokens)?;
    build(postfix)
}
