use crate::common::{NonZeroUInt, UInt};
use crate::parse::ast::DiceSpec;

/// Limit the `repl` binary applies unless `--max-rolls` says otherwise.
pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Sides of the die rolled when a command arrives without an expression.
pub const DEFAULT_SIDES: UInt = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct RollConfig {
    /// Upper bound on dice rolled per evaluation; `None` (the default) disables the check.
    pub max_rolls: Option<usize>,
    /// Rolled instead of parsing when the input is empty.
    pub default_roll: DiceSpec,
}

impl RollConfig {
    pub fn bounded(max_rolls: usize) -> Self {
        Self::default().with_max_rolls(Some(max_rolls))
    }

    pub fn with_max_rolls(mut self, max_rolls: Option<usize>) -> Self {
        self.max_rolls = max_rolls;
        self
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        let sides = NonZeroUInt::new(DEFAULT_SIDES).unwrap_or(NonZeroUInt::MIN);
        Self {
            max_rolls: None,
            default_roll: DiceSpec::single(sides),
        }
    }
}
