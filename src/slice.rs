use core::{
    num::NonZeroIsize,
    ops::{
        Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo,
        RangeToInclusive,
    },
};

use crate::{Result, ValueError};

/// A half-open `start:stop:step` selection along one axis.
///
/// Negative bounds count from the end of the axis and out-of-range bounds are
/// clamped, so every slice is valid for every axis length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slice {
    pub(crate) start: Bound<isize>,
    pub(crate) end: Bound<isize>,
    pub(crate) step: isize,
}

macro_rules! impl_from_range {
    ($($range:ty),* $(,)?) => {
        $(
            impl From<$range> for Slice {
                fn from(range: $range) -> Self {
                    Self::from_bounds(&range)
                }
            }
        )*
    };
}

impl_from_range!(
    Range<isize>,
    RangeFrom<isize>,
    RangeFull,
    RangeInclusive<isize>,
    RangeTo<isize>,
    RangeToInclusive<isize>,
);

impl Slice {
    /// Builds a slice from optional bounds, the way `a[start:stop:step]` reads.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self> {
        if step == 0 {
            return Err(ValueError::ZeroStep.into());
        }
        Ok(Self {
            start: start.map_or(Bound::Unbounded, Bound::Included),
            end: stop.map_or(Bound::Unbounded, Bound::Excluded),
            step,
        })
    }

    fn from_bounds<R>(range: &R) -> Self
    where
        R: RangeBounds<isize>,
    {
        Self {
            start: range.start_bound().cloned(),
            end: range.end_bound().cloned(),
            step: 1,
        }
    }

    pub const fn step(&self) -> isize {
        self.step
    }

    pub fn step_by(self, step: NonZeroIsize) -> Self {
        Self {
            step: step.get(),
            ..self
        }
    }

    /// First selected position and number of selected elements on an axis of
    /// length `dim`.
    ///
    /// The start is only meaningful when the length is non-zero.
    pub(crate) fn resolve(&self, dim: usize) -> (isize, usize) {
        let dim = dim as i128;
        let step = self.step as i128;
        // Inclusive clamping range for both bounds. A backward walk may stop
        // one before the first element.
        let (lower, upper) = if step > 0 { (0, dim) } else { (-1, dim - 1) };
        let clamp = |x: i128| x.max(lower).min(upper);
        let wrap = |x: isize| {
            let x = x as i128;
            if x < 0 {
                x + dim
            } else {
                x
            }
        };

        let start = match self.start {
            Bound::Included(x) => clamp(wrap(x)),
            Bound::Excluded(x) => clamp(wrap(x) + step.signum()),
            Bound::Unbounded if step > 0 => lower,
            Bound::Unbounded => upper,
        };
        let stop = match self.end {
            Bound::Excluded(x) => clamp(wrap(x)),
            Bound::Included(x) => clamp(wrap(x) + step.signum()),
            Bound::Unbounded if step > 0 => upper,
            Bound::Unbounded => lower,
        };

        let len = if step > 0 && start < stop {
            (stop - start - 1) / step + 1
        } else if step < 0 && stop < start {
            (start - stop - 1) / -step + 1
        } else {
            0
        };
        (start.max(0) as isize, len as usize)
    }
}
