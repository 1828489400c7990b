use core::fmt;

use super::Array;
use crate::{NDArray, Scalar};

const NUM_EDGE_ELEMENTS: usize = 3;
const TRUNCATION_THRESHOLD: usize = 1_000;

struct FormatOption {
    num_edge_elements: usize,
}

impl Default for FormatOption {
    fn default() -> Self {
        Self {
            num_edge_elements: NUM_EDGE_ELEMENTS,
        }
    }
}

impl FormatOption {
    fn new(array_len: usize, no_truncation: bool) -> Self {
        Self::default().without_truncation(no_truncation || array_len < TRUNCATION_THRESHOLD)
    }

    fn without_truncation(mut self, valid: bool) -> Self {
        if valid {
            self.num_edge_elements = usize::MAX / 2;
        }
        self
    }
}

fn format_array<T, F>(
    array: &Array<T>,
    indent: usize,
    option: &FormatOption,
    f: &mut fmt::Formatter<'_>,
    mut fmt: F,
) -> fmt::Result
where
    F: Clone + FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    T: Scalar,
{
    if array.is_empty() {
        let n = array.ndims();
        write!(f, "{}{}", "[".repeat(n), "]".repeat(n))?;
        return Ok(());
    }

    match array.ndims() {
        0 => {
            for elem in array.iter() {
                fmt(elem, f)?;
            }
        }
        n_dims => {
            f.write_str("[")?;
            let len = array.shape()[0];
            if len > option.num_edge_elements * 2 {
                for i in 0..option.num_edge_elements {
                    fmt_indent(i, n_dims, indent, f)?;
                    let sub = subarray(array, i as isize)?;
                    format_array(&sub, indent + 1, option, f, fmt.clone())?;
                }
                fmt_indent(1, n_dims, indent, f)?;
                f.write_str("...")?;
                fmt_indent(1, n_dims, indent, f)?;
                for i in 0..option.num_edge_elements {
                    fmt_indent(i, n_dims, indent, f)?;
                    let sub = subarray(array, i as isize - option.num_edge_elements as isize)?;
                    format_array(&sub, indent + 1, option, f, fmt.clone())?;
                }
            } else {
                for i in 0..len {
                    fmt_indent(i, n_dims, indent, f)?;
                    let sub = subarray(array, i as isize)?;
                    format_array(&sub, indent + 1, option, f, fmt.clone())?;
                }
            }
            f.write_str("]")?;
        }
    }

    Ok(())
}

fn subarray<T>(array: &Array<T>, i: isize) -> Result<Array<T>, fmt::Error>
where
    T: Scalar,
{
    array.subview(i).map_err(|_| fmt::Error)
}

fn fmt_indent(i: usize, n_dims: usize, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if i != 0 {
        f.write_str(",")?;
        if n_dims > 1 {
            write!(f, "{}", "\n".repeat(n_dims - 1))?;
            write!(f, "{}", " ".repeat(indent))?;
        } else {
            f.write_str(" ")?;
        }
    }
    Ok(())
}

impl<T> fmt::Debug for Array<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let option = FormatOption::new(self.len(), f.alternate());
        format_array(self, 1, &option, f, <T as fmt::Debug>::fmt)?;
        write!(
            f,
            ", shape={:?}, strides={:?}, dtype={}",
            self.shape,
            self.strides,
            self.dtype(),
        )?;
        Ok(())
    }
}

macro_rules! impl_fmt {
    ($( $trait:ident ),*) => {
        $(
            impl<T> fmt::$trait for Array<T>
            where
                T: Scalar + fmt::$trait,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let option = FormatOption::new(self.len(), f.alternate());
                    format_array(self, 1, &option, f, <T as fmt::$trait>::fmt)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_fmt!(Display, LowerExp, UpperExp);

#[cfg(test)]
mod tests {
    use crate::{s, Array, NDArray, Result};

    #[test]
    fn format_empty_arrays() -> Result<()> {
        let a1 = Array::from(Vec::<i64>::new());
        let a2 = a1.reshape([0, 0])?;
        let a3 = a1.reshape([2, 0, 4])?;

        assert_eq!(format!("{}", a1), "[]");
        assert_eq!(format!("{}", a2), "[[]]");
        assert_eq!(format!("{}", a3), "[[[]]]");

        Ok(())
    }

    #[test]
    fn format_0d_array() -> Result<()> {
        let a1 = Array::from(vec![1_i64]);
        let a0 = a1.slice(s!(0))?;

        assert_eq!(format!("{}", a0), "1");

        Ok(())
    }

    #[test]
    fn format_1d_array() {
        const N: usize = super::TRUNCATION_THRESHOLD + 10;
        let a1 = Array::from(vec![1_i64; N]);

        assert_eq!(format!("{}", a1), "[1, 1, 1, ..., 1, 1, 1]");
        assert_eq!(format!("{:#}", a1), format!("[{}]", ["1"; N].join(", ")));
    }

    #[test]
    fn format_matrix() -> Result<()> {
        let m = Array::<i64>::arange(0, 6, 1)?.into_shape([2, 3])?;

        assert_eq!(format!("{}", m), "[[0, 1, 2],\n [3, 4, 5]]");
        assert_eq!(format!("{}", m.t()), "[[0, 3],\n [1, 4],\n [2, 5]]");

        Ok(())
    }

    #[test]
    fn format_debug_with_layout() -> Result<()> {
        let a = Array::from(vec![0.5_f64, 1.5]);

        assert_eq!(
            format!("{:?}", a),
            "[0.5, 1.5], shape=[2], strides=[1], dtype=float64"
        );
        assert_eq!(format!("{:e}", a), "[5e-1, 1.5e0]");

        Ok(())
    }

    #[test]
    fn format_transposed_3d_view() -> Result<()> {
        let a3 = Array::<i64>::arange(0, 8, 1)?.into_shape([2, 2, 2])?;

        assert_eq!(
            format!("{}", a3.t()),
            "[[[0, 4],\n  [2, 6]],\n\n [[1, 5],\n  [3, 7]]]"
        );

        Ok(())
    }

    #[test]
    fn format_truncated_strided_view() -> Result<()> {
        let m = Array::<i64>::arange(0, 6000, 1)?.into_shape([60, 100])?;
        let v = m.slice(s![..;-2, ..;2])?;
        let row = |base: i64| {
            format!(
                "[{}, {}, {}, ..., {}, {}, {}]",
                base,
                base + 2,
                base + 4,
                base + 94,
                base + 96,
                base + 98
            )
        };
        let expected = format!(
            "[{},\n {},\n {},\n ...,\n {},\n {},\n {}]",
            row(5900),
            row(5700),
            row(5500),
            row(500),
            row(300),
            row(100)
        );

        assert_eq!(v.shape(), &[30, 50]);
        assert_eq!(format!("{}", v), expected);

        Ok(())
    }
}
