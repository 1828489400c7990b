use crate::{IndexError, Result, ShapeError};

pub fn normalize_axis(axis: isize, n_dims: usize) -> Result<usize> {
    if axis < -(n_dims as isize) || axis >= n_dims as isize {
        return Err(ShapeError::IncompatibleAxis(format!(
            "axis {axis} is out of bounds for array of dimension {n_dims}"
        ))
        .into());
    }

    let ret = if axis < 0 {
        (axis + n_dims as isize) as usize
    } else {
        axis as usize
    };
    Ok(ret)
}

/// Wraps a possibly negative position along `axis` into `[0, size)`.
pub fn normalize_index(index: isize, axis: usize, size: usize) -> Result<usize> {
    let dim = size as isize;
    if index < -dim || index >= dim {
        return Err(IndexError::OutOfBounds { index, axis, size }.into());
    }

    let ret = if index < 0 { index + dim } else { index };
    Ok(ret as usize)
}

/// Advances row-major `indices` within `shape` by one element. Returns
/// `false` once every position has been visited.
#[inline]
pub fn increment_indices(indices: &mut [usize], shape: &[usize]) -> bool {
    for (index, &dim) in indices.iter_mut().rev().zip(shape.iter().rev()) {
        *index += 1;
        if *index == dim {
            *index = 0;
        } else {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{increment_indices, normalize_axis, normalize_index};
    use crate::Result;

    #[test]
    fn normalize_axes() -> Result<()> {
        assert_eq!(normalize_axis(1, 3)?, 1);
        assert_eq!(normalize_axis(-1, 3)?, 2);
        assert!(normalize_axis(3, 3).is_err());
        assert!(normalize_axis(-4, 3).is_err());

        Ok(())
    }

    #[test]
    fn normalize_indices() -> Result<()> {
        assert_eq!(normalize_index(0, 0, 4)?, 0);
        assert_eq!(normalize_index(-1, 0, 4)?, 3);
        assert_eq!(normalize_index(-4, 0, 4)?, 0);

        let e = normalize_index(4, 1, 4).unwrap_err();
        assert!(e.is_index());
        assert!(normalize_index(-5, 0, 4).is_err());
        assert!(normalize_index(0, 0, 0).is_err());

        Ok(())
    }

    #[test]
    fn walk_indices_in_row_major_order() {
        let shape = [2, 3];
        let mut indices = [0, 0];
        let mut visited = vec![indices];
        while increment_indices(&mut indices, &shape) {
            visited.push(indices);
        }

        assert_eq!(
            visited,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
    }
}
