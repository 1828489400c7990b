use super::Array;
use crate::{
    shape::{self, NewShape},
    NDArray, Result, Scalar,
};

impl<T> Array<T>
where
    T: Scalar,
{
    /// Gives the elements a new shape, in row-major order.
    ///
    /// A single `-1` entry is inferred from the element count. Contiguous
    /// arrays are reshaped as views; anything else is copied first.
    pub fn reshape<NS>(&self, shape: NS) -> Result<Array<T>>
    where
        NS: NewShape,
    {
        let shape = shape::infer_shape(self.len(), &shape)?;
        if self.is_contiguous() {
            let strides = shape::row_major_strides(&shape);
            Ok(Self::from_parts(
                shape,
                strides,
                self.storage.clone(),
                self.offset,
            ))
        } else {
            log::debug!(
                "reshaping non-contiguous array of shape {:?} into {:?} requires a copy",
                self.shape,
                shape
            );
            let owned = self.to_owned_array();
            Ok(Self::from_contiguous(shape, owned.storage))
        }
    }

    /// Like [`Array::reshape`], consuming `self`.
    pub fn into_shape<NS>(self, shape: NS) -> Result<Array<T>>
    where
        NS: NewShape,
    {
        if self.is_contiguous() {
            let shape = shape::infer_shape(self.len(), &shape)?;
            let strides = shape::row_major_strides(&shape);
            Ok(Self::from_parts(shape, strides, self.storage, self.offset))
        } else {
            self.reshape(shape)
        }
    }

    /// A 1-d array of every element in row-major order.
    pub fn flatten(&self) -> Result<Array<T>> {
        self.reshape([-1])
    }
}
