use super::error::DiceNotationError;
use crate::common::*;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// How the individual rolls of a [DiceSpec] are reduced to one value.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DiceMode {
    /// Sum every roll.
    #[default]
    Regular,
    /// Keep the single highest roll.
    KeepHighest,
    /// Keep the single lowest roll.
    KeepLowest,
}

impl DiceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "",
            Self::KeepHighest => "kh",
            Self::KeepLowest => "kl",
        }
    }
}

impl fmt::Display for DiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiceMode {
    type Err = DiceNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Regular),
            "kh" => Ok(Self::KeepHighest),
            "kl" => Ok(Self::KeepLowest),
            other => Err(DiceNotationError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceSpec {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
    pub mode: DiceMode,
}

impl DiceSpec {
    pub fn new(count: NonZeroUInt, sides: NonZeroUInt, mode: DiceMode) -> Self {
        Self { count, sides, mode }
    }

    /// A single die with the given number of sides.
    pub fn single(sides: NonZeroUInt) -> Self {
        Self::new(NonZeroUInt::MIN, sides, DiceMode::Regular)
    }

    /// Smallest and largest value this roll can produce.
    pub fn bounds(&self) -> (Int, Int) {
        let sides = Int::from(self.sides.get());
        match self.mode {
            DiceMode::Regular => {
                let count = Int::from(self.count.get());
                (count, count.saturating_mul(sides))
            }
            DiceMode::KeepHighest | DiceMode::KeepLowest => (1, sides),
        }
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}{}", self.count, self.sides, self.mode)
    }
}

fn parse_nonzero(
    digits: &str,
    zero: DiceNotationError,
) -> Result<NonZeroUInt, DiceNotationError> {
    let value: UInt = digits.parse().map_err(|e: std::num::ParseIntError| {
        match e.kind() {
            IntErrorKind::PosOverflow => DiceNotationError::TooLarge,
            _ => DiceNotationError::InvalidNumber(digits.to_string()),
        }
    })?;
    NonZeroUInt::new(value).ok_or(zero)
}

impl FromStr for DiceSpec {
    type Err = DiceNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, rest) = s.split_once('d').ok_or(DiceNotationError::NoDelimiter)?;
        let count = if count.is_empty() {
            NonZeroUInt::MIN
        } else {
            parse_nonzero(count, DiceNotationError::ZeroCount)?
        };

        let split = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (sides, mode) = rest.split_at(split);
        if sides.is_empty() {
            return Err(DiceNotationError::MissingSides);
        }
        let sides = parse_nonzero(sides, DiceNotationError::ZeroSides)?;
        let mode = mode.parse()?;

        Ok(Self::new(count, sides, mode))
    }
}

/// A dice expression tree. Every child is owned by exactly one parent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    Const(Int),
    Dice(DiceSpec),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match op {
            BinaryOperator::Add => Self::Add(left, right),
            BinaryOperator::Sub => Self::Sub(left, right),
            BinaryOperator::Mul => Self::Mul(left, right),
            BinaryOperator::Div => Self::Div(left, right),
        }
    }

    /// The operator and operands of a binary node, or `None` for a leaf.
    pub fn as_binary(&self) -> Option<(BinaryOperator, &Expression, &Expression)> {
        let (op, l, r) = match self {
            Self::Add(l, r) => (BinaryOperator::Add, l, r),
            Self::Sub(l, r) => (BinaryOperator::Sub, l, r),
            Self::Mul(l, r) => (BinaryOperator::Mul, l, r),
            Self::Div(l, r) => (BinaryOperator::Div, l, r),
            Self::Const(_) | Self::Dice(_) => return None,
        };
        Some((op, l, r))
    }

    fn precedence(&self) -> Option<u8> {
        self.as_binary().map(|(op, _, _)| op.precedence())
    }
}

impl From<Int> for Expression {
    fn from(x: Int) -> Self {
        Self::Const(x)
    }
}

impl From<DiceSpec> for Expression {
    fn from(x: DiceSpec) -> Self {
        Self::Dice(x)
    }
}

fn fmt_binary(
    f: &mut fmt::Formatter<'_>,
    op: BinaryOperator,
    l: &Expression,
    r: &Expression,
) -> fmt::Result {
    // Only the parentheses needed to reparse into the same tree.
    let prec = op.precedence();
    if l.precedence().map_or(false, |p| p < prec) {
        write!(f, "({})", l)?;
    } else {
        write!(f, "{}", l)?;
    }
    write!(f, " {} ", op)?;
    if r.precedence().map_or(false, |p| p <= prec) {
        write!(f, "({})", r)
    } else {
        write!(f, "{}", r)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(x) => fmt::Display::fmt(x, f),
            Self::Dice(x) => fmt::Display::fmt(x, f),
            Self::Add(l, r) => fmt_binary(f, BinaryOperator::Add, l, r),
            Self::Sub(l, r) => fmt_binary(f, BinaryOperator::Sub, l, r),
            Self::Mul(l, r) => fmt_binary(f, BinaryOperator::Mul, l, r),
            Self::Div(l, r) => fmt_binary(f, BinaryOperator::Div, l, r),
        }
    }
}
