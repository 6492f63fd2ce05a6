use std::fmt::{self, Write};
use std::num::NonZeroU32;
use std::ops::Range;

/// The signed integer every expression evaluates to.
pub type Int = i64;
/// The type of number literals, dice counts and dice sides.
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// Byte range into the source string.
pub type Span = Range<usize>;

/// A value paired with the source span it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter. All operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
