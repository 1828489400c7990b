use core::cmp::Ordering;

use super::Array;
use crate::{NDArray, Numeric, Result, ValueError};

impl<T> Array<T>
where
    T: Numeric,
{
    /// Largest element. A NaN, if present, is returned as the result.
    pub fn max(&self) -> Result<T> {
        self.extremum("max", Ordering::Greater)
            .map(|(_, value)| value)
    }

    /// Smallest element. A NaN, if present, is returned as the result.
    pub fn min(&self) -> Result<T> {
        self.extremum("min", Ordering::Less).map(|(_, value)| value)
    }

    /// Row-major position of the first largest element, or of the first NaN.
    pub fn argmax(&self) -> Result<usize> {
        self.extremum("argmax", Ordering::Greater)
            .map(|(pos, _)| pos)
    }

    /// Row-major position of the first smallest element, or of the first NaN.
    pub fn argmin(&self) -> Result<usize> {
        self.extremum("argmin", Ordering::Less)
            .map(|(pos, _)| pos)
    }

    /// Sum of all elements; zero for an empty array.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Arithmetic mean as a float.
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(ValueError::EmptyArray("mean").into());
        }
        Ok(self.iter().map(|&x| x.as_f64()).sum::<f64>() / self.len() as f64)
    }

    fn extremum(&self, op: &'static str, wanted: Ordering) -> Result<(usize, T)> {
        let mut iter = self.iter().copied().enumerate();
        let mut best = iter.next().ok_or(ValueError::EmptyArray(op))?;
        if best.1.is_nan() {
            return Ok(best);
        }

        for (pos, x) in iter {
            if x.is_nan() {
                return Ok((pos, x));
            }
            if x.partial_cmp(&best.1) == Some(wanted) {
                best = (pos, x);
            }
        }
        Ok(best)
    }
}
