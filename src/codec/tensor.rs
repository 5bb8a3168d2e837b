//! ndarray views of bit vectors for training pipelines.
//!
//! Enabled with the `tensor` feature.

use ndarray::{Array1, Array2};

use super::bits::BitVector;
use super::chess_map::CodecError;

impl BitVector {
    /// Converts the bits to a 0.0/1.0 feature row.
    pub fn to_array(&self) -> Array1<f32> {
        self.as_slice().iter().map(|&b| if b { 1.0 } else { 0.0 }).collect()
    }
}

/// Stacks equally sized vectors into a [rows, bits] matrix.
///
/// Every vector must have the length of the first one.
pub fn stack_vectors(vectors: &[BitVector]) -> Result<Array2<f32>, CodecError> {
    let cols = vectors.first().map_or(0, BitVector::len);
    if let Some(bad) = vectors.iter().find(|v| v.len() != cols) {
        return Err(CodecError::LengthMismatch {
            expected: cols,
            actual: bad.len(),
        });
    }
    Ok(Array2::from_shape_fn((vectors.len(), cols), |(r, c)| {
        if vectors[r].as_slice()[c] {
            1.0
        } else {
            0.0
        }
    }))
}
