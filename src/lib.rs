//! A multidimensional array core.
//!
//! An [`Array`] is a strided view over reference-counted [`Storage`]. Slicing,
//! transposing and reshaping contiguous data produce views that share the
//! underlying buffer; fancy and boolean indexing produce copies.
//!
//! ```
//! use kogane::{s, Array, NDArray};
//!
//! let a = Array::<i64>::arange_to(30)?;
//! let m = a.reshape([5, 6])?;
//! let block = m.index(s![..3, 1..])?;
//!
//! assert_eq!(block.shape(), &[3, 5]);
//! assert!(block.shares_storage_with(&a));
//! # Ok::<(), kogane::Error>(())
//! ```

mod array;
pub use array::{arange, arange_to, eye, ones, range, zeros, Array, Iter};

mod array_index;
pub use array_index::{ArrayIndex, NewAxis};

mod dtype;
pub use dtype::{DType, Element, Numeric, Scalar};

mod dyn_array;
pub use dyn_array::DynArray;

mod error;
pub use error::{Error, IndexError, Result, ShapeError, ValueError};

mod nested;
pub use nested::Nested;

pub mod random;
pub use random::Generator;

mod slice;
pub use slice::Slice;

mod slice_info;
pub use slice_info::SliceInfo;

pub mod shape;
pub use shape::NewShape;

pub mod storage;
pub use storage::Storage;

/// Read-only introspection shared by every array type.
pub trait NDArray {
    fn dtype(&self) -> DType;
    fn is_contiguous(&self) -> bool;
    /// Position of the first element within the storage buffer.
    fn offset(&self) -> usize;
    /// Whether no other array shares this array's storage.
    fn owns_storage(&self) -> bool;
    fn shape(&self) -> &[usize];
    fn strides(&self) -> &[isize];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize {
        shape::array_len(self.shape())
    }

    fn ndims(&self) -> usize {
        self.shape().len()
    }
}
