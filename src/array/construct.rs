use super::{routine, Array};
use crate::{
    shape,
    storage::{self, Storage},
    DynArray, Element, Nested, Numeric, Result, Scalar, ShapeError, ValueError,
};

impl<T> Array<T>
where
    T: Scalar,
{
    /// Wraps `data` as a row-major array of the given shape.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        if shape::array_len(shape) != data.len() {
            return Err(ShapeError::IncompatibleShape(format!(
                "cannot create array of shape {:?} from {} elements",
                shape,
                data.len()
            ))
            .into());
        }
        Ok(Self::from_contiguous(shape.to_vec(), Storage::from(data)))
    }

    /// Calls `f` with the coordinates of every element in row-major order.
    pub fn from_shape_fn<F>(shape: &[usize], mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> T,
    {
        let len = shape::array_len(shape);
        let mut data = Vec::with_capacity(len);
        if len > 0 {
            let mut indices = vec![0_usize; shape.len()];
            loop {
                data.push(f(&indices));
                if !routine::increment_indices(&mut indices, shape) {
                    break;
                }
            }
        }
        Self::from_contiguous(shape.to_vec(), Storage::from(data))
    }

    /// Like [`Array::from_shape_fn`] for generators that ignore position.
    pub fn from_shape_simple_fn<F>(shape: &[usize], f: F) -> Self
    where
        F: FnMut() -> T,
    {
        let data = storage::create_buf_with(shape::array_len(shape), f);
        Self::from_contiguous(shape.to_vec(), Storage::from(data))
    }

    pub fn full(shape: &[usize], value: T) -> Self {
        Self::from_contiguous(
            shape.to_vec(),
            Storage::filled(shape::array_len(shape), value),
        )
    }
}

impl<T> Array<T>
where
    T: Numeric,
{
    /// Evenly spaced values `start, start + step, ...` stopping before `stop`.
    pub fn arange(start: T, stop: T, step: T) -> Result<Self> {
        if step.is_zero() {
            return Err(ValueError::ZeroStep.into());
        }

        let len = T::range_len(start, stop, step);
        let data = (0..len).map(|n| T::range_nth(start, step, n)).collect::<Vec<_>>();
        Ok(Self::from(data))
    }

    /// `arange(start, stop, 1)`.
    pub fn range(start: T, stop: T) -> Result<Self> {
        Self::arange(start, stop, T::one())
    }

    /// `arange(0, stop, 1)`.
    pub fn arange_to(stop: T) -> Result<Self> {
        Self::arange(T::zero(), stop, T::one())
    }

    /// A 2-d `n`×`n` array with ones on the diagonal.
    pub fn eye(n: usize) -> Self {
        let mut data = storage::create_buf(n * n, T::zero());
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self::from_contiguous(vec![n, n], Storage::from(data))
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Builds an array from a nested literal, converting every leaf to `T`.
    ///
    /// Integers are promoted when `T` is a float type; a float leaf for an
    /// integer `T` is rejected rather than truncated.
    pub fn from_nested<N>(nested: N) -> Result<Self>
    where
        N: Into<Nested>,
    {
        let nested = nested.into();
        let shape = nested.shape()?;
        let data = nested
            .leaves()
            .map(T::from_element)
            .collect::<Result<Vec<_>>>()?;
        Self::from_shape_vec(&shape, data)
    }
}

/// `arange(start, stop, step)` with the dtype inferred from the arguments:
/// integral if all three are integers, floating point otherwise.
pub fn arange<A, B, C>(start: A, stop: B, step: C) -> Result<DynArray>
where
    A: Into<Element>,
    B: Into<Element>,
    C: Into<Element>,
{
    DynArray::arange(start, stop, step)
}

/// `arange(start, stop, 1)` with the dtype inferred from the bounds.
pub fn range<A, B>(start: A, stop: B) -> Result<DynArray>
where
    A: Into<Element>,
    B: Into<Element>,
{
    DynArray::arange(start, stop, 1)
}

/// `arange(0, stop, 1)` with the dtype inferred from `stop`.
pub fn arange_to<B>(stop: B) -> Result<DynArray>
where
    B: Into<Element>,
{
    DynArray::arange(0, stop, 1)
}

/// An `n`×`n` floating point identity matrix.
pub fn eye(n: usize) -> Array<f64> {
    Array::eye(n)
}

/// A floating point array filled with ones.
pub fn ones(shape: &[usize]) -> Array<f64> {
    Array::ones(shape)
}

/// A floating point array filled with zeros.
pub fn zeros(shape: &[usize]) -> Array<f64> {
    Array::zeros(shape)
}

#[cfg(test)]
mod tests {
    use super::Array;
    use crate::{DType, NDArray, Result};

    #[test]
    fn arange() -> Result<()> {
        let a = Array::<i64>::arange(0, 20, 1)?;

        assert_eq!(a.len(), 20);
        assert_eq!(a.get(&[0])?, 0);
        assert_eq!(a.get(&[-1])?, 19);
        assert_eq!(a.dtype(), DType::Int64);

        let a = Array::<i64>::arange(0, 20, 4)?;
        assert_eq!(a.to_vec(), vec![0, 4, 8, 12, 16]);

        let a = Array::<i64>::arange(5, 0, -2)?;
        assert_eq!(a.to_vec(), vec![5, 3, 1]);

        assert!(Array::<i64>::arange(5, 0, 1)?.is_empty());

        Ok(())
    }

    #[test]
    fn arange_extreme_bounds() -> Result<()> {
        let a = Array::<i64>::arange(i64::MIN, i64::MAX, i64::MAX)?;
        assert_eq!(a.to_vec(), vec![i64::MIN, -1, i64::MAX - 1]);

        let a = Array::<i64>::arange(i64::MAX, i64::MIN, i64::MIN)?;
        assert_eq!(a.to_vec(), vec![i64::MAX, -1]);

        Ok(())
    }

    #[test]
    fn arange_with_default_step() -> Result<()> {
        assert_eq!(Array::<i64>::arange_to(5)?.to_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(Array::<i64>::range(3, 6)?.to_vec(), vec![3, 4, 5]);
        assert!(Array::<i64>::range(6, 3)?.is_empty());
        assert_eq!(Array::<f64>::arange_to(2.5)?.to_vec(), vec![0.0, 1.0, 2.0]);
        assert_eq!(super::arange_to(30)?.len(), 30);
        assert_eq!(super::range(0, 20)?.dtype(), DType::Int64);
        assert_eq!(super::range(0, 2.5)?.dtype(), DType::Float64);

        Ok(())
    }

    #[test]
    fn arange_floats() -> Result<()> {
        let a = Array::<f64>::arange(0.0, 1.0, 0.25)?;

        assert_eq!(a.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(a.dtype(), DType::Float64);

        Ok(())
    }

    #[test]
    fn arange_with_zero_step() {
        assert!(Array::<i64>::arange(0, 10, 0).unwrap_err().is_value());
        assert!(Array::<f64>::arange(0.0, 1.0, 0.0).unwrap_err().is_value());
    }

    #[test]
    fn zeros() {
        let a = super::zeros(&[4, 3]);

        assert_eq!(a.shape(), &[4, 3]);
        assert_eq!(a.dtype(), DType::Float64);
        assert!(a.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn ones() {
        let shape = [2, 3, 4];
        let a3 = Array::<i64>::ones(&shape);

        assert_eq!(a3.shape(), &shape);
        assert!(a3.iter().all(|&x| x == 1));
        assert_eq!(super::ones(&[10]).len(), 10);
    }

    #[test]
    fn eye() -> Result<()> {
        let a = super::eye(3);

        assert_eq!(a.shape(), &[3, 3]);
        for i in 0..3_isize {
            for j in 0..3_isize {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(a.get(&[i, j])?, expected);
            }
        }
        assert_eq!(Array::<i64>::eye(0).shape(), &[0, 0]);

        Ok(())
    }

    #[test]
    fn from_shape_vec() -> Result<()> {
        let a = Array::from_shape_vec(&[2, 2], vec![1_i64, 2, 3, 4])?;

        assert_eq!(a.get(&[1, 0])?, 3);
        assert!(Array::from_shape_vec(&[2, 3], vec![1_i64, 2])
            .unwrap_err()
            .is_shape());

        Ok(())
    }

    #[test]
    fn from_shape_fn() -> Result<()> {
        let a = Array::from_shape_fn(&[2, 3], |c| (c[0] * 10 + c[1]) as i64);

        assert_eq!(a.to_vec(), vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(Array::from_shape_fn(&[], |_| 4_i64).to_vec(), vec![4]);
        assert!(Array::from_shape_fn(&[3, 0], |_| 4_i64).is_empty());

        Ok(())
    }

    #[test]
    fn from_nested() -> Result<()> {
        let a = Array::<i64>::from_nested(vec![vec![10, 11, 12], vec![20, 21, 22]])?;

        assert_eq!(a.shape(), &[2, 3]);
        assert_eq!(a.to_vec(), vec![10, 11, 12, 20, 21, 22]);

        let a = Array::<f64>::from_nested(vec![1, 2, 3])?;
        assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);

        assert!(Array::<i64>::from_nested(vec![vec![1, 2], vec![3]])
            .unwrap_err()
            .is_shape());
        assert!(Array::<i64>::from_nested(vec![1.5, 2.0])
            .unwrap_err()
            .is_value());

        Ok(())
    }
}
