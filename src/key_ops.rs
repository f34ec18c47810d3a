//! Per-kind hash and compare dispatch for key scalars.
//!
//! The kind set is closed, so dispatch is a pattern match on the
//! discriminant rather than a table of function pointers. The map checks
//! a key's kind against its declared key kind before calling in here, so
//! on the key path both sides of a compare always carry the same kind.

use crate::scalar::Scalar;
use core::cmp::Ordering;

/// Tolerance for 32-bit float key equality.
pub(crate) const FLOAT32_EPSILON: f32 = 1e-6;
/// Tolerance for 64-bit float key equality.
pub(crate) const FLOAT64_EPSILON: f64 = 1e-9;

const DJB2_SEED: u64 = 5381;

/// Hash a key scalar.
///
/// Int hashes as its bit pattern widened to u64, text with the djb2
/// recurrence over its UTF-8 bytes, and floats as their raw bit
/// pattern. Floats deliberately do NOT hash by numeric value: two keys
/// that compare equal under the epsilon rule can still hash apart, and
/// a lookup will then miss. Callers that need epsilon-equal floats to
/// collide must canonicalize the bits themselves.
pub(crate) fn hash_scalar(key: &Scalar) -> u64 {
    match key {
        Scalar::Int(v) => *v as u64,
        Scalar::Text(s) => {
            let mut hash = DJB2_SEED;
            for &byte in s.as_bytes() {
                hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
            }
            hash
        }
        Scalar::Float32(v) => u64::from(v.to_bits()),
        Scalar::Float64(v) => v.to_bits(),
    }
}

/// Compare two key scalars of the same kind.
///
/// Int is the standard total order, text is byte-lexicographic, floats
/// are equal when the difference is within the kind's epsilon and
/// otherwise ordered by the sign of the difference. Mixed kinds fall
/// back to the discriminant order; the key path never reaches that arm.
pub(crate) fn compare_scalars(a: &Scalar, b: &Scalar) -> Ordering {
    match (a, b) {
        (Scalar::Int(x), Scalar::Int(y)) => x.cmp(y),
        (Scalar::Text(x), Scalar::Text(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Scalar::Float32(x), Scalar::Float32(y)) => {
            let diff = x - y;
            if diff > FLOAT32_EPSILON {
                Ordering::Greater
            } else if diff < -FLOAT32_EPSILON {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        }
        (Scalar::Float64(x), Scalar::Float64(y)) => {
            let diff = x - y;
            if diff > FLOAT64_EPSILON {
                Ordering::Greater
            } else if diff < -FLOAT64_EPSILON {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        }
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(s: &Scalar) -> u8 {
    match s {
        Scalar::Int(_) => 0,
        Scalar::Text(_) => 1,
        Scalar::Float32(_) => 2,
        Scalar::Float64(_) => 3,
    }
}
