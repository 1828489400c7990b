use crate::{DType, Element, Result, ShapeError};

/// A nested sequence literal such as `[[1, 2], [3, 4]]`.
///
/// Any scalar convertible into an [`Element`], and any `Vec` or array of
/// things convertible into `Nested`, converts into `Nested`.
#[derive(Clone, Debug, PartialEq)]
pub enum Nested {
    Scalar(Element),
    List(Vec<Nested>),
}

impl Nested {
    /// The shape implied by the nesting: one entry per level, each the
    /// length of the sequences at that level.
    pub fn shape(&self) -> Result<Vec<usize>> {
        self.shape_at(0)
    }

    fn shape_at(&self, depth: usize) -> Result<Vec<usize>> {
        match self {
            Self::Scalar(_) => Ok(Vec::new()),
            Self::List(items) => {
                let mut iter = items.iter();
                let inner = match iter.next() {
                    Some(first) => first.shape_at(depth + 1)?,
                    None => return Ok(vec![0]),
                };
                for (i, item) in iter.enumerate() {
                    let sibling = item.shape_at(depth + 1)?;
                    if sibling != inner {
                        return Err(ShapeError::RaggedNesting {
                            depth: depth + 1,
                            detail: format!(
                                "element {} has shape {:?} but element 0 has shape {:?}",
                                i + 1,
                                sibling,
                                inner
                            ),
                        }
                        .into());
                    }
                }

                let mut shape = Vec::with_capacity(inner.len() + 1);
                shape.push(items.len());
                shape.extend(inner);
                Ok(shape)
            }
        }
    }

    /// Leaf values in row-major order.
    pub fn leaves(&self) -> impl Iterator<Item = Element> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out.into_iter()
    }

    fn collect_leaves(&self, out: &mut Vec<Element>) {
        match self {
            Self::Scalar(v) => out.push(*v),
            Self::List(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
        }
    }

    /// The narrowest dtype holding every leaf; integers when there are none.
    pub fn dtype(&self) -> DType {
        self.leaves()
            .fold(DType::Int64, |acc, v| acc.promote(v.dtype()))
    }
}

macro_rules! impl_nested_from_scalar {
    ($( $t:ty ),*) => {
        $(
            impl From<$t> for Nested {
                fn from(v: $t) -> Self {
                    Self::Scalar(v.into())
                }
            }
        )*
    };
}

impl_nested_from_scalar!(Element, i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl<T> From<Vec<T>> for Nested
where
    T: Into<Nested>,
{
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Nested
where
    T: Into<Nested>,
{
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
