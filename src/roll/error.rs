use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled (limit is {0})")]
    TooManyRolls(usize),
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("result is out of range")]
    Overflow,
}
