use super::error::*;
use crate::common::*;
use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    // Anything dice-shaped is taken whole; the builder rejects bad sides and modifiers.
    #[regex(r"[0-9]*d[0-9]*[A-Za-z]*")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token<'a> {
    Number(UInt),
    /// Raw `[count]d<sides>[kh|kl]` text, validated when the tree is built.
    Dice(&'a str),
    Operator(BinaryOperator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::Dice(s) => f.write_str(s),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Splits `s` into tokens in source order, skipping whitespace.
pub fn tokenize(s: &str) -> PResult<Vec<Spanned<Token<'_>>>> {
    let mut lexer = TokenKind::lexer(s);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let token = match kind {
            TokenKind::Integer => match slice.parse() {
                Ok(x) => Token::Number(x),
                Err(_) => {
                    return Err(ParseError::new(
                        ParseErrorKind::NumberTooLarge(slice.to_string()),
                        span,
                    ))
                }
            },
            TokenKind::Dice => Token::Dice(slice),
            TokenKind::LeftParen => Token::LeftParen,
            TokenKind::RightParen => Token::RightParen,
            TokenKind::Error => {
                return Err(ParseError::new(
                    ParseErrorKind::UnrecognizedToken(slice.to_string()),
                    span,
                ))
            }
            op => match op.as_binary_op() {
                Some(op) => Token::Operator(op),
                None => unreachable!("every remaining token kind is an operator"),
            },
        };
        tokens.push(Spanned::new(token, span));
    }

    log::trace!("tokenized {:?} into {} tokens", s, tokens.len());
    Ok(tokens)
}
