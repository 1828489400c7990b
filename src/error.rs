use core::num::TryFromIntError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
    #[error("index error: {0}")]
    Index(#[from] IndexError),
    #[error("value error: {0}")]
    Value(#[from] ValueError),
    #[error(transparent)]
    TryFromInt(#[from] TryFromIntError),
}

impl Error {
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("{0}")]
    IncompatibleAxis(String),
    #[error("{0}")]
    IncompatibleDimension(String),
    #[error("{0}")]
    IncompatibleShape(String),
    /// Sibling sequences of a nested literal differ in length or depth.
    #[error("inhomogeneous nested sequence at depth {depth}: {detail}")]
    RaggedNesting { depth: usize, detail: String },
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum IndexError {
    #[error("index {index} is out of bounds for axis {axis} with size {size}")]
    OutOfBounds {
        index: isize,
        axis: usize,
        size: usize,
    },
    #[error("too many indices for array: array is {n_dims}-dimensional, but {n_indexed} were indexed")]
    TooManyIndices { n_dims: usize, n_indexed: usize },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("step cannot be zero")]
    ZeroStep,
    #[error("low >= high ({low} >= {high})")]
    EmptyRange { low: i64, high: i64 },
    #[error("zero-size array to reduction operation {0} which has no identity")]
    EmptyArray(&'static str),
    #[error("cannot convert {0} to the target dtype without losing information")]
    LossyCast(f64),
}
