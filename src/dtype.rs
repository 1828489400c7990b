use core::fmt;

use num_traits::{Num, NumCast, ToPrimitive};

use crate::{Result, ValueError};

/// Element type tag reported by [`NDArray::dtype`](crate::NDArray::dtype).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DType {
    Bool,
    Int64,
    Float64,
}

impl DType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        }
    }

    /// The dtype able to represent values of both `self` and `other`.
    pub const fn promote(self, other: Self) -> Self {
        match (self, other) {
            (Self::Float64, _) | (_, Self::Float64) => Self::Float64,
            (Self::Int64, _) | (_, Self::Int64) => Self::Int64,
            _ => Self::Bool,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that can be stored in an [`Array`](crate::Array).
pub trait Scalar:
    Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Send + Sync + 'static
{
    const DTYPE: DType;
}

impl Scalar for bool {
    const DTYPE: DType = DType::Bool;
}

impl Scalar for i64 {
    const DTYPE: DType = DType::Int64;
}

impl Scalar for f64 {
    const DTYPE: DType = DType::Float64;
}

/// Scalars that support arithmetic, ranges and reductions.
pub trait Numeric: Scalar + Num + NumCast {
    fn from_element(value: Element) -> Result<Self>;
    fn into_element(self) -> Element;
    fn is_nan(self) -> bool;
    /// Number of values in `start, start + step, ...` that stay before `stop`.
    fn range_len(start: Self, stop: Self, step: Self) -> usize;
    /// The `n`th value of that sequence, for `n < range_len(..)`.
    fn range_nth(start: Self, step: Self, n: usize) -> Self;

    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Numeric for i64 {
    fn from_element(value: Element) -> Result<Self> {
        match value {
            Element::Int(v) => Ok(v),
            Element::Float(v) => Err(ValueError::LossyCast(v).into()),
        }
    }

    fn into_element(self) -> Element {
        Element::Int(self)
    }

    fn is_nan(self) -> bool {
        false
    }

    fn range_len(start: Self, stop: Self, step: Self) -> usize {
        debug_assert_ne!(step, 0);

        let (start, stop, step) = (start as i128, stop as i128, step as i128);
        let n = if step > 0 {
            (stop - start + step - 1) / step
        } else {
            (stop - start + step + 1) / step
        };
        n.max(0) as usize
    }

    fn range_nth(start: Self, step: Self, n: usize) -> Self {
        (start as i128 + n as i128 * step as i128) as i64
    }
}

impl Numeric for f64 {
    fn from_element(value: Element) -> Result<Self> {
        Ok(value.to_f64())
    }

    fn into_element(self) -> Element {
        Element::Float(self)
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn range_len(start: Self, stop: Self, step: Self) -> usize {
        let n = ((stop - start) / step).ceil();
        if n.is_nan() || n <= 0.0 {
            0
        } else {
            n as usize
        }
    }

    fn range_nth(start: Self, step: Self, n: usize) -> Self {
        start + n as f64 * step
    }
}

/// A dynamically typed numeric value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Int(i64),
    Float(f64),
}

impl Element {
    pub const fn dtype(&self) -> DType {
        match self {
            Self::Int(_) => DType::Int64,
            Self::Float(_) => DType::Float64,
        }
    }

    pub const fn is_integral(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! impl_element_from {
    ($variant:ident, $target:ty, [$( $t:ty ),*]) => {
        $(
            impl From<$t> for Element {
                fn from(v: $t) -> Self {
                    Self::$variant(v as $target)
                }
            }
        )*
    };
}

impl_element_from!(Int, i64, [i8, i16, i32, i64, u8, u16, u32]);
impl_element_from!(Float, f64, [f32, f64]);
