mod new_shape;
pub use new_shape::NewShape;

use crate::{Result, ShapeError};

/// Number of elements described by `shape`.
#[inline]
pub fn array_len(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Row-major (C order) strides for `shape`, in elements.
///
/// The last axis has stride 1 and every other axis steps over the product of
/// the axes after it. Zero-length axes count as 1 so that strides stay
/// non-zero for empty arrays.
pub fn row_major_strides(shape: &[usize]) -> Vec<isize> {
    let mut strides = vec![0_isize; shape.len()];
    strides
        .iter_mut()
        .zip(shape.iter())
        .rfold(1_isize, |acc, (stride, &dim)| {
            *stride = acc;
            acc * (dim as isize).max(1)
        });
    strides
}

/// Whether `strides` walk `shape` exactly like [`row_major_strides`].
///
/// Length-1 axes never move so their stride is ignored, and arrays of zero or
/// one element are always contiguous.
pub fn is_contiguous(shape: &[usize], strides: &[isize]) -> bool {
    debug_assert_eq!(shape.len(), strides.len());

    let len = array_len(shape);
    if len == 0 || len == 1 {
        return true;
    }

    let mut stride_expected = 1_usize;
    for (&dim, &stride) in shape.iter().rev().zip(strides.iter().rev()) {
        if dim == 1 {
            continue;
        }
        if stride != stride_expected as isize {
            return false;
        }
        stride_expected *= dim;
    }

    true
}

/// Buffer position of `coords` for a view starting at `base_offset`.
#[inline]
pub fn offset_of(coords: &[usize], base_offset: usize, strides: &[isize]) -> usize {
    debug_assert_eq!(coords.len(), strides.len());

    let offset = coords
        .iter()
        .zip(strides)
        .fold(base_offset as isize, |acc, (&coord, &stride)| {
            acc + coord as isize * stride
        });
    debug_assert!(offset >= 0);
    offset as usize
}

/// Resolves a reshape target against an array of `len` elements, filling in
/// a single `-1` entry.
pub(crate) fn infer_shape<NS>(len: usize, shape: &NS) -> Result<Vec<usize>>
where
    NS: NewShape + ?Sized,
{
    let dims = shape.as_dims();
    let mut inferred = vec![0_usize; dims.len()];

    for (i, &dim) in dims.iter().enumerate() {
        if dim < 0 {
            if dim != -1 || dims.iter().skip(i + 1).any(|&x| x < 0) {
                return Err(ShapeError::IncompatibleShape(
                    "can only specify one unknown dimension".into(),
                )
                .into());
            }

            let rest_dim: isize = dims[..i]
                .iter()
                .chain(dims.iter().skip(i + 1))
                .product::<isize>();
            if rest_dim == 0 {
                return Err(ShapeError::IncompatibleShape(format!(
                    "cannot reshape array of size {} into shape {:?}",
                    len, dims
                ))
                .into());
            }
            inferred[i] = len / rest_dim as usize;
        } else {
            inferred[i] = dim as usize;
        }
    }
    if array_len(&inferred) != len {
        return Err(ShapeError::IncompatibleShape(format!(
            "cannot reshape array of size {} into shape {:?}",
            len, dims
        ))
        .into());
    }

    Ok(inferred)
}
