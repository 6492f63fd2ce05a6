use super::ast::{DiceSpec, Expression};
use super::error::*;
use super::lexer::Token;
use crate::common::*;

fn malformed(reason: &'static str, span: Span) -> ParseError {
    ParseError::new(ParseErrorKind::MalformedExpression(reason), span)
}

/// Builds the expression tree from tokens in postfix order.
///
/// # Errors
/// [ParseErrorKind::InvalidDiceNotation] for dice tokens that do not describe a
/// valid roll, and [ParseErrorKind::MalformedExpression] when operators and
/// operands do not pair up into a single tree.
pub fn build(tokens: Vec<Spanned<Token<'_>>>) -> PResult<Expression> {
    let mut stack: Vec<Spanned<Expression>> = Vec::new();

    for Spanned { node, span } in tokens {
        let expr = match node {
            Token::Number(x) => Expression::Const(Int::from(x)),
            Token::Dice(notation) => match notation.parse::<DiceSpec>() {
                Ok(spec) => Expression::Dice(spec),
                Err(reason) => {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidDiceNotation {
                            notation: notation.to_string(),
                            reason,
                        },
                        span,
                    ))
                }
            },
            Token::Operator(op) => {
                let (right, left) = match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => return Err(malformed("operator is missing an operand", span)),
                };
                let span = left.span.start..right.span.end;
                stack.push(Spanned::new(
                    Expression::binary(op, left.node, right.node),
                    span,
                ));
                continue;
            }
            Token::LeftParen | Token::RightParen => {
                return Err(malformed("parenthesis in postfix input", span))
            }
        };
        stack.push(Spanned::new(expr, span));
    }

    let root = stack.pop().ok_or_else(|| malformed("empty expression", 0..0))?;
    if let Some(extra) = stack.pop() {
        return Err(malformed("operand is missing an operator", extra.span));
    }

    log::debug!("built expression {}", root.node);
    Ok(root.node)
}
