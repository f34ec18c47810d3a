//! Scalar: the closed key/value domain as a tagged sum type.

use crate::key_ops;
use core::cmp::Ordering;
use std::fmt;

/// Discriminant of a [`Scalar`]. Every table declares one kind for its
/// keys at construction; values may carry any kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    Int,
    Text,
    Float32,
    Float64,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Int => "int",
            ScalarKind::Text => "text",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// A single tagged value: one of the supported scalar kinds, with owned
/// text for the string kind. Used for both keys and values.
///
/// Equality follows the per-kind compare rules of the table: exact for
/// int and text, epsilon tolerance for the float kinds, and never equal
/// across kinds.
#[derive(Clone, Debug)]
pub enum Scalar {
    Int(i64),
    Text(String),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Text(_) => ScalarKind::Text,
            Scalar::Float32(_) => ScalarKind::Float32,
            Scalar::Float64(_) => ScalarKind::Float64,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && key_ops::compare_scalars(self, other) == Ordering::Equal
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_owned())
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float64(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Float32(v) => write!(f, "{v:.6}"),
            Scalar::Float64(v) => write!(f, "{v:.6}"),
        }
    }
}

/// A borrowed, homogeneous slice of raw scalars: the typed input to the
/// batch operations and the array-to-scalar conversions.
#[derive(Copy, Clone, Debug)]
pub enum ScalarSlice<'a> {
    Int(&'a [i64]),
    Text(&'a [&'a str]),
    Float32(&'a [f32]),
    Float64(&'a [f64]),
}

impl ScalarSlice<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarSlice::Int(_) => ScalarKind::Int,
            ScalarSlice::Text(_) => ScalarKind::Text,
            ScalarSlice::Float32(_) => ScalarKind::Float32,
            ScalarSlice::Float64(_) => ScalarKind::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ScalarSlice::Int(xs) => xs.len(),
            ScalarSlice::Text(xs) => xs.len(),
            ScalarSlice::Float32(xs) => xs.len(),
            ScalarSlice::Float64(xs) => xs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert every element to an owned [`Scalar`], duplicating text
    /// into fresh storage.
    pub fn to_scalars(&self) -> Vec<Scalar> {
        match self {
            ScalarSlice::Int(xs) => xs.iter().map(|&v| Scalar::Int(v)).collect(),
            ScalarSlice::Text(xs) => xs.iter().map(|&s| Scalar::Text(s.to_owned())).collect(),
            ScalarSlice::Float32(xs) => xs.iter().map(|&v| Scalar::Float32(v)).collect(),
            ScalarSlice::Float64(xs) => xs.iter().map(|&v| Scalar::Float64(v)).collect(),
        }
    }
}
