use crate::common::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("error at position {}: {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("unrecognized input {0:?}")]
    UnrecognizedToken(String),
    #[error("number {0} is too large")]
    NumberTooLarge(String),
    #[error("invalid dice notation {notation:?}: {reason}")]
    InvalidDiceNotation {
        notation: String,
        reason: DiceNotationError,
    },
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("malformed expression: {0}")]
    MalformedExpression(&'static str),
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DiceNotationError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("number of sides is missing")]
    MissingSides,
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error("number is too large")]
    TooLarge,
    #[error("must roll at least one die")]
    ZeroCount,
    #[error("dice must have at least one side")]
    ZeroSides,
    #[error("unknown modifier {0:?}, expected 'kh' or 'kl'")]
    UnknownMode(String),
}

pub type PResult<T> = Result<T, ParseError>;
