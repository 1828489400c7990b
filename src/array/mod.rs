mod compare;

mod construct;
pub use construct::{arange, arange_to, eye, ones, range, zeros};

mod fmt;

mod index;

mod iter;
pub(crate) use iter::Offsets;
pub use iter::Iter;

mod reduce;

mod reshape;

mod routine;

use crate::{shape, storage::Storage, DType, NDArray, Result, Scalar, ShapeError};

/// A strided view over shared [`Storage`].
///
/// Element `coords` lives at `offset + Σ coords[i] * strides[i]` in the
/// storage buffer. Cloning an `Array` clones the view, never the elements.
#[derive(Clone)]
pub struct Array<T> {
    shape: Vec<usize>,
    strides: Vec<isize>,
    storage: Storage<T>,
    offset: usize,
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            strides: vec![1],
            storage: Storage::from(data),
            offset: 0,
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> NDArray for Array<T>
where
    T: Scalar,
{
    #[inline]
    fn dtype(&self) -> DType {
        T::DTYPE
    }

    #[inline]
    fn is_contiguous(&self) -> bool {
        shape::is_contiguous(&self.shape, &self.strides)
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn owns_storage(&self) -> bool {
        self.storage.share_count() == 1
    }

    #[inline]
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn strides(&self) -> &[isize] {
        &self.strides
    }
}

impl<T> PartialEq for Array<T>
where
    T: Scalar,
{
    /// Arrays are equal when they have the same shape and the same elements,
    /// however their storage is laid out.
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.iter().eq(other.iter())
    }
}

impl<T> Array<T>
where
    T: Scalar,
{
    /// Assembles a view. Callers guarantee that every coordinate inside
    /// `shape` lands inside `storage`.
    pub(crate) fn from_parts(
        shape: Vec<usize>,
        strides: Vec<isize>,
        storage: Storage<T>,
        offset: usize,
    ) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        debug_assert!(
            shape::array_len(&shape) == 0
                || Offsets::new(&shape, &strides, offset).all(|o| o < storage.len())
        );

        Self {
            shape,
            strides,
            storage,
            offset,
        }
    }

    /// Wraps `storage` as a row-major array of the given shape.
    pub(crate) fn from_contiguous(shape: Vec<usize>, storage: Storage<T>) -> Self {
        debug_assert_eq!(shape::array_len(&shape), storage.len());

        let strides = shape::row_major_strides(&shape);
        Self::from_parts(shape, strides, storage, 0)
    }

    /// Stride of `axis` in elements; negative axes count from the end.
    pub fn stride(&self, axis: isize) -> Result<isize> {
        let axis = routine::normalize_axis(axis, self.ndims())?;
        Ok(self.strides[axis])
    }

    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Whether another array currently shares this array's storage.
    #[inline]
    pub fn is_view(&self) -> bool {
        !self.owns_storage()
    }

    #[inline]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn offsets(&self) -> Offsets<'_> {
        Offsets::new(&self.shape, &self.strides, self.offset)
    }

    /// Elements in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }

    /// Element at `coords`, one (possibly negative) position per axis.
    pub fn get(&self, coords: &[isize]) -> Result<T> {
        let pos = self.position(coords)?;
        Ok(self.storage.as_slice()[pos])
    }

    /// Overwrites the element at `coords`.
    ///
    /// Storage shared with other arrays is copied first, so the write is only
    /// visible through `self`.
    pub fn set(&mut self, coords: &[isize], value: T) -> Result<()> {
        let pos = self.position(coords)?;
        self.storage.make_mut()[pos] = value;
        Ok(())
    }

    /// Overwrites every element of the view with `value`, copying shared
    /// storage first like [`Array::set`].
    pub fn fill(&mut self, value: T) {
        let positions = self.offsets().collect::<Vec<_>>();
        let data = self.storage.make_mut();
        for pos in positions {
            data[pos] = value;
        }
    }

    fn position(&self, coords: &[isize]) -> Result<usize> {
        if coords.len() != self.ndims() {
            return Err(ShapeError::IncompatibleDimension(format!(
                "expected {} coordinates for array of dimension {}, got {}",
                self.ndims(),
                self.ndims(),
                coords.len()
            ))
            .into());
        }

        let mut pos = self.offset as isize;
        for (axis, ((&coord, &dim), &stride)) in coords
            .iter()
            .zip(&self.shape)
            .zip(&self.strides)
            .enumerate()
        {
            pos += routine::normalize_index(coord, axis, dim)? as isize * stride;
        }
        Ok(pos as usize)
    }

    /// Copies the elements into fresh, exclusively owned row-major storage.
    pub fn to_owned_array(&self) -> Array<T> {
        log::debug!("copying {} elements of shape {:?}", self.len(), self.shape);
        Self::from_contiguous(self.shape.clone(), self.iter().copied().collect())
    }

    /// Applies `f` to every element, producing a new row-major array.
    pub fn map<U, F>(&self, f: F) -> Array<U>
    where
        F: FnMut(T) -> U,
        U: Scalar,
    {
        Array::from_contiguous(self.shape.clone(), self.iter().copied().map(f).collect())
    }

    pub fn permute(&self, axes: &[usize]) -> Result<Array<T>> {
        if axes.len() != self.ndims() {
            return Err(ShapeError::IncompatibleAxis("axes don't match array".into()).into());
        }

        let mut counts = vec![0_usize; axes.len()];
        for &axis in axes {
            if axis >= axes.len() {
                return Err(ShapeError::IncompatibleAxis(format!(
                    "axis {} is out of bounds for array of dimension {}",
                    axis,
                    self.ndims()
                ))
                .into());
            }
            counts[axis] += 1;
        }
        if counts.iter().any(|&count| count != 1) {
            return Err(ShapeError::IncompatibleAxis("repeated axis in permutation".into()).into());
        }

        let shape = axes.iter().map(|&axis| self.shape[axis]).collect();
        let strides = axes.iter().map(|&axis| self.strides[axis]).collect();
        Ok(Self::from_parts(
            shape,
            strides,
            self.storage.clone(),
            self.offset,
        ))
    }

    /// Reverses the axis order. The result shares storage with `self`.
    pub fn transpose(&self) -> Array<T> {
        let mut shape = self.shape.clone();
        shape.reverse();
        let mut strides = self.strides.clone();
        strides.reverse();

        Self::from_parts(shape, strides, self.storage.clone(), self.offset)
    }

    /// Shorthand for [`Array::transpose`].
    #[inline]
    pub fn t(&self) -> Array<T> {
        self.transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::Array;
    use crate::{s, shape, NDArray, Result};

    #[test]
    fn from_vec() {
        let a = Array::from(vec![1_i64, 2, 3]);

        assert_eq!(a.shape(), &[3]);
        assert_eq!(a.strides(), &[1]);
        assert_eq!(a.offset(), 0);
        assert!(a.owns_storage());
        assert!(!a.is_view());
        assert!(a.is_contiguous());
    }

    #[test]
    fn collect_from_iterator() {
        let a = (1_i64..).take(6).collect::<Array<_>>();

        assert_eq!(a.len(), 6);
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn clones_are_views() {
        let a = Array::from(vec![1.0_f64, 2.0]);
        let b = a.clone();

        assert!(a.is_view());
        assert!(b.shares_storage_with(&a));
        drop(b);
        assert!(a.owns_storage());
    }

    #[test]
    fn equality_ignores_layout() -> Result<()> {
        let a = (0_i64..6).collect::<Array<_>>().into_shape([2, 3])?;
        let b = a.transpose().to_owned_array().transpose();

        assert!(!b.shares_storage_with(&a));
        assert!(!b.is_contiguous());
        assert_eq!(a, b);
        assert_ne!(a, a.transpose());

        Ok(())
    }

    #[test]
    fn get_and_set() -> Result<()> {
        let mut a = (0_i64..12).collect::<Array<_>>().into_shape([3, 4])?;

        assert_eq!(a.get(&[1, 2])?, 6);
        assert_eq!(a.get(&[-1, -1])?, 11);
        assert!(a.get(&[3, 0]).unwrap_err().is_index());
        assert!(a.get(&[0]).unwrap_err().is_shape());

        a.set(&[0, 0], 100)?;
        assert_eq!(a.get(&[0, 0])?, 100);

        Ok(())
    }

    #[test]
    fn writes_detach_shared_storage() -> Result<()> {
        let a = (0_i64..6).collect::<Array<_>>();
        let mut v = a.slice(s!(1..4))?;

        assert!(v.shares_storage_with(&a));

        v.fill(-1);

        assert!(!v.shares_storage_with(&a));
        assert_eq!(v.to_vec(), vec![-1, -1, -1]);
        assert_eq!(a.to_vec(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(v.storage().as_slice(), &[0, -1, -1, -1, 4, 5]);

        Ok(())
    }

    #[test]
    fn fill() -> Result<()> {
        let mut a3 = (1_i64..)
            .take(24)
            .collect::<Array<_>>()
            .into_shape([2, 3, 4])?;
        a3.fill(7);

        assert!(a3.iter().all(|&x| x == 7));

        Ok(())
    }

    #[test]
    fn to_owned_array() -> Result<()> {
        let a = (0_i64..6).collect::<Array<_>>().into_shape([2, 3])?;
        let at = a.transpose();
        let owned = at.to_owned_array();

        assert!(owned.owns_storage());
        assert!(owned.is_contiguous());
        assert_eq!(owned.strides(), shape::row_major_strides(&[3, 2]).as_slice());
        assert_eq!(owned.to_vec(), vec![0, 3, 1, 4, 2, 5]);

        Ok(())
    }

    #[test]
    fn stride_per_axis() -> Result<()> {
        let a = (0_i64..24).collect::<Array<_>>().into_shape([2, 3, 4])?;

        assert_eq!(a.stride(0)?, 12);
        assert_eq!(a.stride(-1)?, 1);
        assert!(a.stride(3).is_err());

        Ok(())
    }

    #[test]
    fn permute() -> Result<()> {
        let a3 = Array::from(vec![1_i64; 24]).into_shape([2, 3, 4])?;
        let a3p = a3.permute(&[2, 0, 1])?;

        assert_eq!(a3p.shape(), &[4, 2, 3]);
        assert_eq!(a3p.strides(), &[1, 12, 4]);
        assert_eq!(a3p.offset(), a3.offset());
        assert!(a3p.shares_storage_with(&a3));

        Ok(())
    }

    #[test]
    #[should_panic]
    fn permute_by_axis_out_of_bounds() {
        let a3 = Array::from(vec![1_i64; 24]).into_shape([2, 3, 4]).unwrap();
        a3.permute(&[0, 1, 100]).unwrap();
    }

    #[test]
    #[should_panic]
    fn permute_by_repeated_axes() {
        let a3 = Array::from(vec![1_i64; 24]).into_shape([2, 3, 4]).unwrap();
        a3.permute(&[0, 1, 0]).unwrap();
    }

    #[test]
    #[should_panic]
    fn permute_by_wrong_number_of_axes() {
        let a3 = Array::from(vec![1_i64; 2]).into_shape([1, 2]).unwrap();
        a3.permute(&[1, 2, 0]).unwrap();
    }

    #[test]
    fn transpose() -> Result<()> {
        let a2 = (1_i64..)
            .take(6)
            .collect::<Array<_>>()
            .into_shape([2, 3])?;
        let a2t = a2.transpose();

        assert_eq!(a2t.shape(), &[3, 2]);
        assert_eq!(a2t.strides(), &[1, 3]);
        assert!(a2t.shares_storage_with(&a2));
        for (&actual, expected) in a2t.iter().zip([1_i64, 4, 2, 5, 3, 6]) {
            assert_eq!(actual, expected);
        }

        Ok(())
    }

    #[test]
    fn transpose_twice_restores_view() -> Result<()> {
        let a3 = (0_i64..24).collect::<Array<_>>().into_shape([2, 3, 4])?;
        let back = a3.t().t();

        assert_eq!(back.shape(), a3.shape());
        assert_eq!(back.strides(), a3.strides());
        assert_eq!(back.offset(), a3.offset());
        assert_eq!(back, a3);

        Ok(())
    }
}
