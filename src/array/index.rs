use super::{routine, Array};
use crate::{
    shape, ArrayIndex, IndexError, NDArray, Result, Scalar, ShapeError, Slice, SliceInfo,
};

/// Per-output-axis element displacements for an index expression that
/// needs a copy.
struct Selection {
    offset: isize,
    axes: Vec<Vec<isize>>,
}

impl<T> Array<T>
where
    T: Scalar,
{
    /// Applies an index expression.
    ///
    /// Expressions made only of integers, slices and [`NewAxis`](crate::NewAxis)
    /// return a view sharing storage with `self`. Any fancy or mask component
    /// makes the result a copy.
    pub fn index<I>(&self, info: I) -> Result<Array<T>>
    where
        I: Into<SliceInfo>,
    {
        let info = info.into();
        if info.is_basic() {
            self.slice(info)
        } else {
            self.gather(&info)
        }
    }

    /// Like [`Array::index`] but restricted to components that produce a view.
    pub fn slice<I>(&self, info: I) -> Result<Array<T>>
    where
        I: Into<SliceInfo>,
    {
        let info = info.into();
        if !info.is_basic() {
            return Err(ShapeError::IncompatibleAxis(
                "fancy and mask indices cannot be expressed as a view".into(),
            )
            .into());
        }

        let (offset, shape, strides) = self.compute_sliced_parts(&info)?;
        log::trace!("sliced view of shape {:?} at offset {}", shape, offset);
        Ok(Self::from_parts(shape, strides, self.storage.clone(), offset))
    }

    /// The sub-array at position `i` of the first axis, so that
    /// `a.subview(1)?.subview(2)?` reads like `a[1][2]`.
    pub fn subview(&self, i: isize) -> Result<Array<T>> {
        self.slice(ArrayIndex::Index(i))
    }

    /// Copies the given positions along the first axis, in order.
    pub fn take(&self, indices: &[isize]) -> Result<Array<T>> {
        self.gather(&SliceInfo::from(ArrayIndex::from(indices)))
    }

    /// Copies the elements where `mask` is true, in row-major order.
    pub fn masked(&self, mask: &Array<bool>) -> Result<Array<T>> {
        self.gather(&SliceInfo::from(ArrayIndex::from(mask)))
    }

    fn check_n_indexed(&self, info: &SliceInfo) -> Result<()> {
        let n_indexed = info
            .as_ref()
            .iter()
            .filter(|idx| !idx.is_mask())
            .map(ArrayIndex::n_axes_consumed)
            .sum::<usize>();
        if n_indexed > self.ndims() {
            return Err(IndexError::TooManyIndices {
                n_dims: self.ndims(),
                n_indexed,
            }
            .into());
        }
        Ok(())
    }

    fn compute_sliced_parts(&self, info: &SliceInfo) -> Result<(usize, Vec<usize>, Vec<isize>)> {
        self.check_n_indexed(info)?;

        let out_n_dims = (self.ndims() as isize + info.dim_diff) as usize;
        let mut out_shape = Vec::with_capacity(out_n_dims);
        let mut out_strides = Vec::with_capacity(out_n_dims);
        let mut in_idx = 0_usize;
        let mut out_offset = self.offset as isize;
        let mut is_empty = false;
        for array_index in info.as_ref() {
            match array_index {
                ArrayIndex::Index(index) => {
                    let dim = self.shape[in_idx];
                    let index = routine::normalize_index(*index, in_idx, dim)?;
                    out_offset += self.strides[in_idx] * index as isize;
                    in_idx += 1;
                }
                ArrayIndex::Slice(slice) => {
                    let (start, len) = slice.resolve(self.shape[in_idx]);
                    let stride = self.strides[in_idx];
                    out_shape.push(len);
                    // A step that overshoots the axis leaves at most one
                    // element, whose stride is never used.
                    out_strides.push(stride.checked_mul(slice.step()).unwrap_or(stride));

                    if len > 0 {
                        out_offset += stride * start;
                    } else {
                        is_empty = true;
                    }
                    in_idx += 1;
                }
                ArrayIndex::NewAxis => {
                    out_shape.push(1);
                    out_strides.push(0);
                }
                ArrayIndex::Fancy(_) | ArrayIndex::Mask(_) => unreachable!(),
            }
        }

        out_shape.extend_from_slice(&self.shape[in_idx..]);
        out_strides.extend_from_slice(&self.strides[in_idx..]);
        debug_assert_eq!(out_shape.len(), out_n_dims);

        if is_empty || self.is_empty() {
            // A clamped start may point past the end of an empty view.
            out_offset = self.offset as isize;
        }
        debug_assert!(out_offset >= 0);
        Ok((out_offset as usize, out_shape, out_strides))
    }

    fn select(&self, info: &SliceInfo) -> Result<Selection> {
        self.check_n_indexed(info)?;

        let mut selection = Selection {
            offset: self.offset as isize,
            axes: Vec::new(),
        };
        let mut in_idx = 0_usize;
        for array_index in info.as_ref() {
            // Masks ahead of this component may already cover every axis.
            if !array_index.is_mask() && in_idx + array_index.n_axes_consumed() > self.ndims() {
                return Err(IndexError::TooManyIndices {
                    n_dims: self.ndims(),
                    n_indexed: info.n_axes_consumed(),
                }
                .into());
            }

            match array_index {
                ArrayIndex::Index(index) => {
                    let dim = self.shape[in_idx];
                    let index = routine::normalize_index(*index, in_idx, dim)?;
                    selection.offset += self.strides[in_idx] * index as isize;
                    in_idx += 1;
                }
                ArrayIndex::Slice(slice) => {
                    selection
                        .axes
                        .push(self.slice_displacements(slice, in_idx));
                    in_idx += 1;
                }
                ArrayIndex::NewAxis => selection.axes.push(vec![0]),
                ArrayIndex::Fancy(indices) => {
                    let dim = self.shape[in_idx];
                    let stride = self.strides[in_idx];
                    let displacements = indices
                        .iter()
                        .map(|&index| {
                            routine::normalize_index(index, in_idx, dim)
                                .map(|index| index as isize * stride)
                        })
                        .collect::<Result<Vec<_>>>()?;
                    selection.axes.push(displacements);
                    in_idx += 1;
                }
                ArrayIndex::Mask(mask) => {
                    selection.axes.push(self.mask_displacements(mask, in_idx)?);
                    in_idx += mask.ndims();
                }
            }
        }

        for axis in in_idx..self.ndims() {
            selection
                .axes
                .push(self.slice_displacements(&Slice::from(..), axis));
        }
        Ok(selection)
    }

    fn slice_displacements(&self, slice: &Slice, axis: usize) -> Vec<isize> {
        let stride = self.strides[axis];
        let (start, len) = slice.resolve(self.shape[axis]);
        (0..len as isize)
            .map(|i| (start + i * slice.step()) * stride)
            .collect()
    }

    fn mask_displacements(&self, mask: &Array<bool>, axis: usize) -> Result<Vec<isize>> {
        let covered = axis..axis + mask.ndims();
        if covered.end > self.ndims() || mask.shape() != &self.shape[covered.clone()] {
            return Err(ShapeError::IncompatibleShape(format!(
                "boolean index of shape {:?} does not match indexed array of shape {:?} at axis {}",
                mask.shape(),
                self.shape,
                axis
            ))
            .into());
        }

        let strides = &self.strides[covered];
        let mut displacements = Vec::new();
        if mask.is_empty() {
            return Ok(displacements);
        }
        let mut indices = vec![0_usize; mask.ndims()];
        for &selected in mask.iter() {
            if selected {
                displacements.push(
                    indices
                        .iter()
                        .zip(strides)
                        .map(|(&i, &stride)| i as isize * stride)
                        .sum(),
                );
            }
            routine::increment_indices(&mut indices, mask.shape());
        }
        Ok(displacements)
    }

    fn gather(&self, info: &SliceInfo) -> Result<Array<T>> {
        let Selection { offset, axes } = self.select(info)?;

        let out_shape = axes.iter().map(Vec::len).collect::<Vec<_>>();
        let len = shape::array_len(&out_shape);
        log::debug!(
            "gathering {} elements of shape {:?} into a copy",
            len,
            out_shape
        );

        let data = self.storage.as_slice();
        let mut out = Vec::with_capacity(len);
        if len > 0 {
            let mut indices = vec![0_usize; out_shape.len()];
            loop {
                let pos = indices
                    .iter()
                    .zip(&axes)
                    .fold(offset, |acc, (&i, displacements)| acc + displacements[i]);
                out.push(data[pos as usize]);
                if !routine::increment_indices(&mut indices, &out_shape) {
                    break;
                }
            }
        }

        Array::from_shape_vec(&out_shape, out)
    }
}
