use core::fmt;

use crate::{
    shape::NewShape, Array, DType, Element, NDArray, Nested, Result, SliceInfo,
};

/// An array whose element type is decided at run time from its inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum DynArray {
    Int(Array<i64>),
    Float(Array<f64>),
}

macro_rules! dispatch {
    ($self:expr, $a:ident => $body:expr) => {
        match $self {
            DynArray::Int($a) => $body,
            DynArray::Float($a) => $body,
        }
    };
}

macro_rules! dispatch_map {
    ($self:expr, $a:ident => $body:expr) => {
        match $self {
            DynArray::Int($a) => DynArray::Int($body),
            DynArray::Float($a) => DynArray::Float($body),
        }
    };
}

impl DynArray {
    /// `arange` over integers when `start`, `stop` and `step` are all
    /// integral, over floats otherwise.
    pub fn arange<A, B, C>(start: A, stop: B, step: C) -> Result<Self>
    where
        A: Into<Element>,
        B: Into<Element>,
        C: Into<Element>,
    {
        match (start.into(), stop.into(), step.into()) {
            (Element::Int(start), Element::Int(stop), Element::Int(step)) => {
                Array::arange(start, stop, step).map(Self::Int)
            }
            (start, stop, step) => {
                Array::arange(start.to_f64(), stop.to_f64(), step.to_f64()).map(Self::Float)
            }
        }
    }

    /// Builds an array from a nested literal, floating point if any leaf is.
    pub fn from_nested<N>(nested: N) -> Result<Self>
    where
        N: Into<Nested>,
    {
        let nested = nested.into();
        match nested.dtype() {
            DType::Float64 => Array::from_nested(nested).map(Self::Float),
            _ => Array::from_nested(nested).map(Self::Int),
        }
    }

    pub fn as_int(&self) -> Option<&Array<i64>> {
        match self {
            Self::Int(a) => Some(a),
            Self::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<&Array<f64>> {
        match self {
            Self::Int(_) => None,
            Self::Float(a) => Some(a),
        }
    }

    /// Converts to a floating point array, copying integer data.
    pub fn into_float(self) -> Array<f64> {
        match self {
            Self::Int(a) => a.map(|x| x as f64),
            Self::Float(a) => a,
        }
    }

    pub fn get(&self, coords: &[isize]) -> Result<Element> {
        dispatch!(self, a => a.get(coords).map(Element::from))
    }

    pub fn to_elements(&self) -> Vec<Element> {
        dispatch!(self, a => a.iter().map(|&x| Element::from(x)).collect())
    }

    pub fn index<I>(&self, info: I) -> Result<Self>
    where
        I: Into<SliceInfo>,
    {
        Ok(dispatch_map!(self, a => a.index(info)?))
    }

    pub fn reshape<NS>(&self, shape: NS) -> Result<Self>
    where
        NS: NewShape,
    {
        Ok(dispatch_map!(self, a => a.reshape(shape)?))
    }

    pub fn transpose(&self) -> Self {
        dispatch_map!(self, a => a.transpose())
    }

    pub fn t(&self) -> Self {
        self.transpose()
    }

    pub fn max(&self) -> Result<Element> {
        dispatch!(self, a => a.max().map(Element::from))
    }

    pub fn min(&self) -> Result<Element> {
        dispatch!(self, a => a.min().map(Element::from))
    }

    pub fn argmax(&self) -> Result<usize> {
        dispatch!(self, a => a.argmax())
    }

    pub fn argmin(&self) -> Result<usize> {
        dispatch!(self, a => a.argmin())
    }
}

impl From<Array<i64>> for DynArray {
    fn from(a: Array<i64>) -> Self {
        Self::Int(a)
    }
}

impl From<Array<f64>> for DynArray {
    fn from(a: Array<f64>) -> Self {
        Self::Float(a)
    }
}

impl NDArray for DynArray {
    fn dtype(&self) -> DType {
        dispatch!(self, a => a.dtype())
    }

    fn is_contiguous(&self) -> bool {
        dispatch!(self, a => a.is_contiguous())
    }

    fn offset(&self) -> usize {
        dispatch!(self, a => a.offset())
    }

    fn owns_storage(&self) -> bool {
        dispatch!(self, a => a.owns_storage())
    }

    fn shape(&self) -> &[usize] {
        dispatch!(self, a => a.shape())
    }

    fn strides(&self) -> &[isize] {
        dispatch!(self, a => a.strides())
    }
}

impl fmt::Display for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, a => fmt::Display::fmt(a, f))
    }
}
