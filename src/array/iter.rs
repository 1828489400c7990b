use core::iter::FusedIterator;

use super::{routine, Array};
use crate::{shape, Scalar};

/// Buffer positions of an array's elements in row-major order.
#[derive(Clone, Debug)]
pub(crate) struct Offsets<'a> {
    indices: Option<Vec<usize>>,
    len: usize,
    offset: usize,
    shape: &'a [usize],
    strides: &'a [isize],
}

impl<'a> Offsets<'a> {
    pub(crate) fn new(shape: &'a [usize], strides: &'a [isize], offset: usize) -> Self {
        let len = shape::array_len(shape);
        Self {
            indices: (len > 0).then(|| vec![0; shape.len()]),
            len,
            offset,
            shape,
            strides,
        }
    }
}

impl ExactSizeIterator for Offsets<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl FusedIterator for Offsets<'_> {}

impl Iterator for Offsets<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.as_mut()?;
        let offset = shape::offset_of(indices, self.offset, self.strides);

        self.len -= 1;
        if !routine::increment_indices(indices, self.shape) {
            debug_assert_eq!(self.len, 0);
            self.indices = None;
        }

        Some(offset)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

/// Iterator over references to an array's elements in row-major order,
/// regardless of the array's strides.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    data: &'a [T],
    offsets: Offsets<'a>,
}

impl<'a, T> Iter<'a, T>
where
    T: Scalar,
{
    pub(super) fn new(a: &'a Array<T>) -> Self {
        Self {
            data: a.storage.as_slice(),
            offsets: Offsets::new(&a.shape, &a.strides, a.offset),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.offsets.next().map(|offset| &self.data[offset])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}
