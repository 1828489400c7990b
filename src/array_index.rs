use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::{Array, NDArray, Slice};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NewAxis;

/// One component of an index expression.
///
/// `Index`, `Slice` and `NewAxis` only rearrange how an array walks its
/// storage and always yield views. `Fancy` and `Mask` pick an arbitrary set
/// of elements and always yield copies.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayIndex {
    Index(isize),
    Slice(Slice),
    NewAxis,
    /// Positions along one axis, in output order. Repeats are allowed.
    Fancy(Vec<isize>),
    /// Boolean selection over as many leading remaining axes as it has
    /// dimensions.
    Mask(Array<bool>),
}

impl ArrayIndex {
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    pub const fn is_new_axis(&self) -> bool {
        matches!(self, Self::NewAxis)
    }

    pub const fn is_slice(&self) -> bool {
        matches!(self, Self::Slice(_))
    }

    pub const fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    pub const fn is_mask(&self) -> bool {
        matches!(self, Self::Mask(_))
    }

    /// Whether the component can be expressed as a uniform stride over the
    /// source storage.
    pub const fn is_basic(&self) -> bool {
        matches!(self, Self::Index(_) | Self::Slice(_) | Self::NewAxis)
    }

    /// Number of source axes this component consumes.
    pub fn n_axes_consumed(&self) -> usize {
        match self {
            Self::Index(_) | Self::Slice(_) | Self::Fancy(_) => 1,
            Self::NewAxis => 0,
            Self::Mask(mask) => mask.ndims(),
        }
    }

    /// Number of output axes this component produces.
    pub const fn n_axes_produced(&self) -> usize {
        match self {
            Self::Index(_) => 0,
            Self::Slice(_) | Self::NewAxis | Self::Fancy(_) | Self::Mask(_) => 1,
        }
    }
}

impl From<isize> for ArrayIndex {
    fn from(v: isize) -> Self {
        Self::Index(v)
    }
}

impl From<NewAxis> for ArrayIndex {
    fn from(_: NewAxis) -> Self {
        Self::NewAxis
    }
}

impl From<Range<isize>> for ArrayIndex {
    fn from(v: Range<isize>) -> Self {
        Self::from(Slice::from(v))
    }
}

impl From<RangeFrom<isize>> for ArrayIndex {
    fn from(v: RangeFrom<isize>) -> Self {
        Self::from(Slice::from(v))
    }
}

impl From<RangeFull> for ArrayIndex {
    fn from(v: RangeFull) -> Self {
        Self::from(Slice::from(v))
    }
}

impl From<RangeInclusive<isize>> for ArrayIndex {
    fn from(v: RangeInclusive<isize>) -> Self {
        Self::from(Slice::from(v))
    }
}

impl From<RangeToInclusive<isize>> for ArrayIndex {
    fn from(v: RangeToInclusive<isize>) -> Self {
        Self::from(Slice::from(v))
    }
}

impl From<RangeTo<isize>> for ArrayIndex {
    fn from(v: RangeTo<isize>) -> Self {
        Self::from(Slice::from(v))
    }
}

impl From<Slice> for ArrayIndex {
    fn from(v: Slice) -> Self {
        Self::Slice(v)
    }
}

impl From<Vec<isize>> for ArrayIndex {
    fn from(v: Vec<isize>) -> Self {
        Self::Fancy(v)
    }
}

impl From<&[isize]> for ArrayIndex {
    fn from(v: &[isize]) -> Self {
        Self::Fancy(v.to_vec())
    }
}

impl<const N: usize> From<[isize; N]> for ArrayIndex {
    fn from(v: [isize; N]) -> Self {
        Self::Fancy(v.to_vec())
    }
}

impl From<Array<bool>> for ArrayIndex {
    fn from(v: Array<bool>) -> Self {
        Self::Mask(v)
    }
}

impl From<&Array<bool>> for ArrayIndex {
    fn from(v: &Array<bool>) -> Self {
        Self::Mask(v.clone())
    }
}
