use super::{error::RollError, roller::Roller, RResult};
use crate::common::*;
use crate::config::RollConfig;
use crate::parse::ast::{DiceMode, DiceSpec, Expression};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Evaluates expression trees, drawing dice from its [Roller].
pub struct RollContext<R = DefaultRoller> {
    config: RollConfig,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(config: RollConfig, roller: R) -> Self {
        Self {
            config,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(RollConfig::bounded(max_rolls), roller)
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// Dice rolled by the most recent evaluation.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        match self.config.max_rolls {
            Some(max) if self.rolls > max => {
                log::debug!("roll limit of {} exceeded", max);
                Err(RollError::TooManyRolls(max))
            }
            _ => Ok(()),
        }
    }

    /// Rolls `spec.count` dice and reduces them according to `spec.mode`.
    pub fn roll(&mut self, spec: &DiceSpec) -> RResult<Int> {
        let count = spec.count.get() as usize;
        self.count_rolls(count)?;

        let mut rolls = self.roller.roll_iter(count, spec.sides).map(Int::from);
        let value = match spec.mode {
            DiceMode::Regular => rolls
                .try_fold(0, |total: Int, x| total.checked_add(x))
                .ok_or(RollError::Overflow)?,
            DiceMode::KeepHighest => rolls.max().unwrap_or_default(),
            DiceMode::KeepLowest => rolls.min().unwrap_or_default(),
        };

        log::trace!("{} rolled {}", spec, value);
        Ok(value)
    }

    /// Evaluates `expr` to a single integer.
    ///
    /// Children are evaluated left to right and the first error stops evaluation.
    /// Division rounds toward negative infinity.
    ///
    /// # Errors
    /// [RollError::DivisionByZero] when a divisor evaluates to zero,
    /// [RollError::Overflow] when an intermediate value leaves the `i64` range and
    /// [RollError::TooManyRolls] when the configured roll limit is exceeded.
    pub fn eval(&mut self, expr: &Expression) -> RResult<Int> {
        self.rolls = 0;
        let value = self.eval_node(expr)?;
        log::debug!("{} = {} ({} dice rolled)", expr, value, self.rolls);
        Ok(value)
    }

    /// Rolls the configured default, used when a command has no expression.
    pub fn roll_default(&mut self) -> RResult<Int> {
        self.rolls = 0;
        let spec = self.config.default_roll;
        self.roll(&spec)
    }

    fn eval_node(&mut self, expr: &Expression) -> RResult<Int> {
        match expr {
            Expression::Const(x) => Ok(*x),
            Expression::Dice(spec) => self.roll(spec),
            Expression::Add(l, r) => {
                let (l, r) = self.eval_pair(l, r)?;
                l.checked_add(r).ok_or(RollError::Overflow)
            }
            Expression::Sub(l, r) => {
                let (l, r) = self.eval_pair(l, r)?;
                l.checked_sub(r).ok_or(RollError::Overflow)
            }
            Expression::Mul(l, r) => {
                let (l, r) = self.eval_pair(l, r)?;
                l.checked_mul(r).ok_or(RollError::Overflow)
            }
            Expression::Div(l, r) => {
                let (l, r) = self.eval_pair(l, r)?;
                floor_div(l, r)
            }
        }
    }

    fn eval_pair(&mut self, l: &Expression, r: &Expression) -> RResult<(Int, Int)> {
        let l = self.eval_node(l)?;
        let r = self.eval_node(r)?;
        Ok((l, r))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(RollConfig::default(), rand::thread_rng())
    }
}

fn floor_div(l: Int, r: Int) -> RResult<Int> {
    if r == 0 {
        return Err(RollError::DivisionByZero);
    }
    let q = l.checked_div(r).ok_or(RollError::Overflow)?;
    if l % r != 0 && (l < 0) != (r < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}
