//! The position codec.
//!
//! Converts positions to fixed-width bit vectors and back, using either the
//! dense 4-bit piece table (267 bits) or the one-hot 12-bit table (779 bits).

pub mod bits;
pub mod chess_map;
pub mod table;
#[cfg(feature = "tensor")]
pub mod tensor;

pub use bits::BitVector;
pub use chess_map::{CodecError, CodecKind, Cm267, Cm779, PositionCodec, METADATA_BITS};
pub use table::{Dense4, OneHot12, PieceCodeTable};
#[cfg(feature = "tensor")]
pub use tensor::stack_vectors;
