use crate::ArrayIndex;

/// An ordered index expression, one component per indexed axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceInfo {
    pub dim_diff: isize,
    pub indices: Vec<ArrayIndex>,
}

impl SliceInfo {
    /// Whether the expression only contains components that produce views.
    pub fn is_basic(&self) -> bool {
        self.indices.iter().all(ArrayIndex::is_basic)
    }

    /// Number of source axes the expression consumes.
    pub fn n_axes_consumed(&self) -> usize {
        self.indices.iter().map(ArrayIndex::n_axes_consumed).sum()
    }
}

impl AsRef<[ArrayIndex]> for SliceInfo {
    fn as_ref(&self) -> &[ArrayIndex] {
        self.indices.as_ref()
    }
}

impl From<Vec<ArrayIndex>> for SliceInfo {
    fn from(indices: Vec<ArrayIndex>) -> Self {
        let dim_diff = indices.iter().fold(0_isize, |acc, index| {
            acc + index.n_axes_produced() as isize - index.n_axes_consumed() as isize
        });
        Self { dim_diff, indices }
    }
}

impl<const N: usize> From<[ArrayIndex; N]> for SliceInfo {
    fn from(indices: [ArrayIndex; N]) -> Self {
        Self::from(Vec::from(indices))
    }
}

impl From<ArrayIndex> for SliceInfo {
    fn from(index: ArrayIndex) -> Self {
        Self::from(vec![index])
    }
}

/// Builds a [`SliceInfo`] from a comma separated list of components.
///
/// Each component is anything convertible into an [`ArrayIndex`]; a range may
/// be followed by `;step`.
///
/// ```
/// use kogane::{s, NewAxis};
///
/// let info = s![1, 2..5, ..;-1, NewAxis, [0, 2]];
/// assert_eq!(info.indices.len(), 5);
/// ```
#[macro_export]
macro_rules! s {
    (@fold [$( $idx:tt )*] $r:expr;$s:expr) => {
        $crate::SliceInfo::from(vec![$( $idx )* $crate::ArrayIndex::from($crate::Slice::from($r).step_by(
            core::num::NonZeroIsize::new($s).expect("slice step cannot be zero")
        ))])
    };
    (@fold [$( $idx:tt )*] $r:expr) => {
        $crate::SliceInfo::from(vec![$( $idx )* $crate::ArrayIndex::from($r)])
    };
    (@fold [$( $idx:tt )*] $r:expr;$s:expr, $( $t:tt )*) => {
        $crate::s!(@fold
            [$( $idx )* $crate::ArrayIndex::from($crate::Slice::from($r).step_by(
                core::num::NonZeroIsize::new($s).expect("slice step cannot be zero")
            )),]
            $( $t )*
        )
    };
    (@fold [$( $idx:tt )*] $r:expr, $( $t:tt )*) => {
        $crate::s!(@fold
            [$( $idx )* $crate::ArrayIndex::from($r),]
            $( $t )*
        )
    };
    ($( $t:tt )*) => {
        $crate::s!(@fold [] $( $t )*)
    };
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroIsize;

    use super::SliceInfo;
    use crate::{Array, ArrayIndex, NewAxis, Result, Slice};

    #[test]
    fn from_vec() {
        let subject = SliceInfo::from(vec![NewAxis.into(), Slice::from(..).into(), 1.into()]);

        assert!(subject.as_ref()[0].is_new_axis());
        assert!(subject.as_ref()[1].is_slice());
        assert!(subject.as_ref()[2].is_index());
        assert_eq!(subject.dim_diff, 0);
        assert!(subject.is_basic());
        assert_eq!(subject.n_axes_consumed(), 2);
    }

    #[test]
    fn s_with_index() {
        let x = 1;
        let info = s!(x);

        assert_eq!(info.dim_diff, -1);
        assert_eq!(info.indices[0], ArrayIndex::Index(1));
    }

    #[test]
    fn s_with_ranges() -> Result<()> {
        let x1 = 2..3;
        let x6 = ..;
        let info = s!(x1, 1.., ..2, 2..=3, ..=4, x6, 2..7;2, 1..;3);

        assert_eq!(info.dim_diff, 0);
        assert_eq!(info.indices.len(), 8);
        assert_eq!(info.indices[0], ArrayIndex::Slice((2..3).into()));
        assert_eq!(info.indices[1], ArrayIndex::Slice((1..).into()));
        assert_eq!(info.indices[2], ArrayIndex::Slice((..2).into()));
        assert_eq!(info.indices[3], ArrayIndex::Slice((2..=3).into()));
        assert_eq!(info.indices[4], ArrayIndex::Slice((..=4).into()));
        assert_eq!(info.indices[5], ArrayIndex::Slice((..).into()));
        assert_eq!(
            info.indices[6],
            ArrayIndex::Slice(Slice::from(2..7).step_by(NonZeroIsize::new(2).unwrap()))
        );
        assert_eq!(
            info.indices[7],
            ArrayIndex::Slice(Slice::from(1..).step_by(3.try_into()?))
        );

        Ok(())
    }

    #[test]
    fn s_with_advanced_components() {
        let mask = Array::from(vec![true, false]);
        let info = s!([0, 2], &mask, 1);

        assert!(!info.is_basic());
        assert!(info.indices[0].is_fancy());
        assert!(info.indices[1].is_mask());
        assert_eq!(info.dim_diff, -1);
    }

    #[test]
    #[should_panic]
    fn s_with_invalid_range() {
        s!(2..10;0);
    }

    #[test]
    #[should_panic]
    fn s_with_invalid_ranges() {
        s!(2..10;0, 1..);
    }

    #[test]
    fn s_with_new_axis() {
        let info = s!(NewAxis);

        assert_eq!(info.dim_diff, 1);
        assert_eq!(info.indices.len(), 1);
        assert_eq!(info.indices[0], ArrayIndex::NewAxis);
    }
}
