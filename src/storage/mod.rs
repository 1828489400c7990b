//! Reference-counted element buffers shared between array views.

mod routine;
pub(crate) use routine::{create_buf, create_buf_with};

use std::sync::Arc;

/// One contiguous, fixed-length buffer of elements.
///
/// Cloning a `Storage` does not copy the elements; it adds another handle to
/// the same buffer. The buffer is freed when the last handle is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Storage<T>(Arc<Vec<T>>);

impl<T> From<Vec<T>> for Storage<T> {
    fn from(data: Vec<T>) -> Self {
        Self(Arc::new(data))
    }
}

impl<T> FromIterator<T> for Storage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Arc::new(FromIterator::from_iter(iter)))
    }
}

impl<T> Storage<T> {
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from(create_buf(len, value))
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of handles (array views included) currently sharing the buffer.
    #[inline]
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Whether `self` and `other` refer to the very same buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Mutable access to the elements, copying them first if the buffer is
    /// shared with another handle.
    pub(crate) fn make_mut(&mut self) -> &mut [T]
    where
        T: Clone,
    {
        if Arc::strong_count(&self.0) > 1 {
            log::debug!(
                "detaching a buffer of {} elements shared by {} handles before writing",
                self.0.len(),
                Arc::strong_count(&self.0)
            );
        }
        Arc::make_mut(&mut self.0).as_mut_slice()
    }
}
