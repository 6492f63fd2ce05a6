use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of die rolls.
///
/// Implemented for every [Rng], so `rand::thread_rng()` or a seeded `StdRng`
/// can be passed directly. [SequenceRoller] replays recorded values instead.
pub trait Roller {
    /// One value in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// `num` values in `1..=sides`, drawn lazily one [roll](Roller::roll) at a time.
    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Rolls<'_, Self>
    where
        Self: Sized,
    {
        Rolls {
            roller: self,
            remaining: num,
            sides,
        }
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

/// Iterator over a batch of rolls, see [Roller::roll_iter].
pub struct Rolls<'a, R> {
    roller: &'a mut R,
    remaining: usize,
    sides: NonZeroUInt,
}

impl<R: Roller> Iterator for Rolls<'_, R> {
    type Item = UInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.roller.roll(self.sides))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Roller> ExactSizeIterator for Rolls<'_, R> {}

/// Replays a recorded list of rolls in order, starting over when it runs out.
///
/// A value larger than the die wraps around into `1..=sides`, so a recorded 8
/// comes back as 2 on a d6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRoller {
    values: Vec<UInt>,
    next: usize,
}

impl SequenceRoller {
    /// Returns `None` if `values` is empty or contains a zero.
    pub fn new(values: impl IntoIterator<Item = UInt>) -> Option<Self> {
        let values: Vec<_> = values.into_iter().collect();
        if values.is_empty() || values.contains(&0) {
            return None;
        }
        Some(Self { values, next: 0 })
    }
}

impl Roller for SequenceRoller {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        (value - 1) % sides.get() + 1
    }
}
