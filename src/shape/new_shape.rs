use core::fmt::Debug;

/// A reshape target. Entries are signed so that a single `-1` can stand for
/// "whatever length makes the element count match".
pub trait NewShape: Debug {
    fn as_dims(&self) -> &[isize];
}

impl<const N: usize> NewShape for [isize; N] {
    fn as_dims(&self) -> &[isize] {
        self
    }
}

impl NewShape for [isize] {
    fn as_dims(&self) -> &[isize] {
        self
    }
}

impl NewShape for Vec<isize> {
    fn as_dims(&self) -> &[isize] {
        self
    }
}

impl<T> NewShape for &T
where
    T: NewShape + ?Sized,
{
    fn as_dims(&self) -> &[isize] {
        (**self).as_dims()
    }
}
