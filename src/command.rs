//! The boundary to a chat command: one string in, one string out.

use crate::common::Int;
use crate::roll::{RollContext, Roller};
use crate::Error;

/// Evaluates a command argument.
///
/// Blank input rolls the context's default die instead of being parsed.
///
/// # Errors
/// Any [Error] raised while parsing or rolling `input`.
pub fn evaluate<R: Roller>(input: &str, ctx: &mut RollContext<R>) -> Result<Int, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(ctx.roll_default()?);
    }
    crate::roll_with(input, ctx)
}

/// Evaluates a command argument and renders the reply: the result as a decimal
/// integer, or the error message.
pub fn respond<R: Roller>(input: &str, ctx: &mut RollContext<R>) -> String {
    match evaluate(input, ctx) {
        Ok(value) => value.to_string(),
        Err(why) => {
            log::debug!("rejected {:?}: {}", input, why);
            why.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RollConfig;
    use crate::roll::SequenceRoller;

    /// Rolls 7, 10, 13, ... wrapped onto each die.
    fn ctx() -> RollContext<SequenceRoller> {
        let roller = SequenceRoller::new((0..50).map(|i| 7 + 3 * i)).unwrap();
        RollContext::new(RollConfig::default(), roller)
    }

    #[test]
    fn test_respond_value() {
        assert_eq!(respond("2d6+3", &mut ctx()), "8");
        assert_eq!(respond("(1+2)*3", &mut ctx()), "9");
        assert_eq!(respond("(0-7)/2", &mut ctx()), "-4");
    }

    #[test]
    fn test_respond_blank_rolls_d20() {
        let roller = SequenceRoller::new([17]).unwrap();
        let mut ctx = RollContext::new(RollConfig::default(), roller);
        assert_eq!(respond("", &mut ctx), "17");
        assert_eq!(respond("   ", &mut ctx), "17");
        assert_eq!(ctx.rolls(), 1);
    }

    #[test]
    fn test_respond_many_dice() {
        assert_eq!(respond("1001d1", &mut RollContext::default()), "1001");
        let mut bounded = RollContext::new_bounded(1000, SequenceRoller::new([1]).unwrap());
        assert_eq!(
            respond("1001d1", &mut bounded),
            "too many dice rolled (limit is 1000)"
        );
    }

    #[test]
    fn test_respond_errors() {
        assert_eq!(respond("5/0", &mut ctx()), "cannot divide by zero");
        assert_eq!(
            respond("(1+2", &mut ctx()),
            "error at position 0: unbalanced parenthesis"
        );
        assert_eq!(
            respond("3d6kx", &mut ctx()),
            "error at position 0: invalid dice notation \"3d6kx\": unknown modifier \"kx\", expected 'kh' or 'kl'"
        );
        assert_eq!(
            respond("1 + ?", &mut ctx()),
            "error at position 4: unrecognized input \"?\""
        );
    }
}
