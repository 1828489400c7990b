use super::Array;
use crate::Scalar;

macro_rules! impl_compare {
    ($( $(#[$meta:meta])* $name:ident => $op:tt ),* $(,)?) => {
        impl<T> Array<T>
        where
            T: Scalar,
        {
            $(
                $(#[$meta])*
                pub fn $name(&self, rhs: T) -> Array<bool> {
                    self.map(|x| x $op rhs)
                }
            )*
        }
    };
}

impl_compare! {
    /// Element-wise `self < rhs`, usable as a boolean mask.
    lt => <,
    le => <=,
    gt => >,
    ge => >=,
    /// Element-wise `self == rhs`.
    eq_scalar => ==,
    ne_scalar => !=,
}

#[cfg(test)]
mod tests {
    use crate::{Array, NDArray, Result};

    #[test]
    fn compare_with_scalar() -> Result<()> {
        let a = Array::<i64>::arange(0, 6, 1)?.into_shape([2, 3])?;
        let mask = a.lt(2);

        assert_eq!(mask.shape(), &[2, 3]);
        assert_eq!(mask.to_vec(), vec![true, true, false, false, false, false]);
        assert!(!mask.is_view());

        assert_eq!(a.le(2).to_vec().iter().filter(|&&b| b).count(), 3);
        assert_eq!(a.gt(4).to_vec(), vec![false, false, false, false, false, true]);
        assert_eq!(a.ge(4).to_vec().iter().filter(|&&b| b).count(), 2);
        assert_eq!(a.eq_scalar(3).get(&[1, 0])?, true);
        assert_eq!(a.ne_scalar(3).get(&[1, 0])?, false);

        Ok(())
    }

    #[test]
    fn compare_follows_view_order() -> Result<()> {
        let a = Array::<i64>::arange(0, 6, 1)?.into_shape([2, 3])?;

        assert_eq!(
            a.t().ge(3).to_vec(),
            vec![false, true, false, true, false, true]
        );

        Ok(())
    }

    #[test]
    fn nan_compares_false() {
        let a = Array::from(vec![f64::NAN, 1.0]);

        assert_eq!(a.lt(2.0).to_vec(), vec![false, true]);
        assert_eq!(a.ne_scalar(f64::NAN).to_vec(), vec![true, true]);
    }
}
