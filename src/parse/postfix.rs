use super::error::*;
use super::lexer::Token;
use crate::common::*;

type Tokens<'a> = Vec<Spanned<Token<'a>>>;

/// Reorders infix tokens into postfix order with the shunting-yard algorithm.
///
/// Operands pass straight through; operators wait on a stack until an operator
/// of lower precedence, a closing parenthesis, or the end of input releases them.
/// Parentheses never reach the output.
///
/// # Errors
/// Returns [ParseErrorKind::UnbalancedParenthesis] if a `)` has no matching `(`
/// or a `(` is never closed.
pub fn to_postfix(tokens: Tokens<'_>) -> PResult<Tokens<'_>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Tokens = Vec::new();

    for token in tokens {
        match token.node {
            Token::Number(_) | Token::Dice(_) => output.push(token),
            Token::LeftParen => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Spanned {
                        node: Token::LeftParen,
                        ..
                    }) => break,
                    Some(op) => output.push(op),
                    None => {
                        return Err(ParseError::new(
                            ParseErrorKind::UnbalancedParenthesis,
                            token.span,
                        ))
                    }
                }
            },
            Token::Operator(incoming) => {
                while let Some(Token::Operator(top)) = stack.last().map(|t| t.node) {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token.node == Token::LeftParen {
            return Err(ParseError::new(
                ParseErrorKind::UnbalancedParenthesis,
                token.span,
            ));
        }
        output.push(token);
    }

    log::trace!(
        "postfix: {}",
        output
            .iter()
            .map(|t| t.node.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::super::lexer::tokenize;
    use super::*;

    fn postfix(s: &str) -> PResult<String> {
        let tokens = to_postfix(tokenize(s).unwrap())?;
        Ok(tokens
            .iter()
            .map(|t| t.node.to_string())
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn check(s: &str, expected: &str) {
        assert_eq!(postfix(s).unwrap(), expected);
    }

    fn check_unbalanced(s: &str, span: Span) {
        let err = postfix(s).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnbalancedParenthesis);
        assert_eq!(err.span, span);
    }

    #[test]
    fn test_postfix_precedence() {
        check("1 + 2 * 3", "1 2 3 * +");
        check("1 * 2 + 3", "1 2 * 3 +");
        check("10 - 3 * 2", "10 3 2 * -");
        check("2d6 + 3", "2d6 3 +");
    }

    #[test]
    fn test_postfix_left_associative() {
        check("1 - 2 - 3", "1 2 - 3 -");
        check("8 / 4 / 2", "8 4 / 2 /");
        check("8 / 4 * 2", "8 4 / 2 *");
        check("1 - 2 + 3", "1 2 - 3 +");
    }

    #[test]
    fn test_postfix_parentheses() {
        check("(1 + 2) * 3", "1 2 + 3 *");
        check("(1d20 + 5) * 2", "1d20 5 + 2 *");
        check("1 - (2 - 3)", "1 2 3 - -");
        check("((4))", "4");
    }

    #[test]
    fn test_postfix_does_not_validate_arity() {
        check("1 + + 2", "1 + 2 +");
        check("", "");
    }

    #[test]
    fn test_postfix_unbalanced() {
        check_unbalanced("(1 + 2", 0..1);
        check_unbalanced("1 + 2)", 5..6);
        check_unbalanced("(1 + (2 * 3)", 0..1);
        check_unbalanced(")(", 0..1);
    }
}
