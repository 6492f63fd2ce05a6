use dice_expr::{
    command, parse, roll, roll_with, DiceSpec, Error, NonZeroUInt, ParseErrorKind, RollConfig,
    RollContext, RollError, Roller, SequenceRoller, UInt,
};

fn loaded(rolls: &[UInt]) -> RollContext<SequenceRoller> {
    let roller = SequenceRoller::new(rolls.iter().copied()).unwrap();
    RollContext::new(RollConfig::default(), roller)
}

/// Always shows the top face.
struct TopFace;

impl Roller for TopFace {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        sides.get()
    }
}

#[test]
fn keep_highest_and_lowest_select_one_die() {
    assert_eq!(roll_with("2d6kh", &mut loaded(&[3, 5])), Ok(5));
    assert_eq!(roll_with("2d6kl", &mut loaded(&[3, 5])), Ok(3));
    assert_eq!(roll_with("2d6", &mut loaded(&[3, 5])), Ok(8));
}

#[test]
fn loaded_rolls_are_deterministic() {
    let s = "(1d20 + 5) * 2 - 3d4kl";
    let rolls = [12, 4, 2, 3];
    let first = roll_with(s, &mut loaded(&rolls)).unwrap();
    assert_eq!(first, (12 + 5) * 2 - 2);
    for _ in 0..5 {
        assert_eq!(roll_with(s, &mut loaded(&rolls)), Ok(first));
    }
}

#[test]
fn arithmetic() {
    assert_eq!(roll("(1+2)*3"), Ok(9));
    assert_eq!(roll("10-3*2"), Ok(4));
    assert_eq!(roll("7/2"), Ok(3));
    assert_eq!(roll("(0-7)/2"), Ok(-4));
    assert_eq!(roll("5/0"), Err(Error::Roll(RollError::DivisionByZero)));
}

#[test]
fn parse_errors() {
    let kind = |s: &str| parse(s).unwrap_err().kind;
    assert_eq!(kind("(1+2"), ParseErrorKind::UnbalancedParenthesis);
    assert!(matches!(kind("1++2"), ParseErrorKind::MalformedExpression(_)));
    assert!(matches!(
        kind("3d6kx"),
        ParseErrorKind::InvalidDiceNotation { .. }
    ));
    assert!(matches!(kind("2 $ 2"), ParseErrorKind::UnrecognizedToken(_)));
}

#[test]
fn dice_stay_in_bounds() {
    for s in ["3d6", "d20", "4d6kh", "1001d6"] {
        let (min, max) = s.parse::<DiceSpec>().unwrap().bounds();
        for _ in 0..100 {
            let value = roll(s).unwrap();
            assert!((min..=max).contains(&value), "{} rolled {}", s, value);
        }
    }
}

#[test]
fn many_dice_are_not_limited_by_default() {
    let value = roll("1001d6").unwrap();
    assert!((1001..=6006).contains(&value));
    let mut ctx = RollContext::new(RollConfig::default(), TopFace);
    assert_eq!(roll_with("1001d6", &mut ctx), Ok(6006));
    assert_eq!(command::respond("1001d1", &mut RollContext::default()), "1001");
}

#[test]
fn roll_limit_is_opt_in() {
    let mut ctx = RollContext::new_bounded(1000, TopFace);
    assert_eq!(
        roll_with("1001d6", &mut ctx),
        Err(Error::Roll(RollError::TooManyRolls(1000)))
    );
    assert_eq!(roll_with("1000d6", &mut ctx), Ok(6000));
}

#[test]
fn custom_roller_only_needs_roll() {
    let mut ctx = RollContext::new(RollConfig::default(), TopFace);
    assert_eq!(roll_with("3d6 + d20kl", &mut ctx), Ok(18 + 20));
    assert_eq!(command::respond("", &mut ctx), "20");
}

#[test]
fn command_replies() {
    let mut ctx = loaded(&[20, 6, 6]);
    assert_eq!(command::respond("", &mut ctx), "20");
    assert_eq!(command::respond("2d6 + 3", &mut ctx), "15");
    assert_eq!(command::respond("1 / (2 - 2)", &mut ctx), "cannot divide by zero");
}
