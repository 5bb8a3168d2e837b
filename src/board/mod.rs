//! Board representation and position types.
//!
//! Contains the square and piece types, the `Position` capability the codec
//! works against, and `Board`, the crate's own implementation of it.

pub mod piece;
pub mod position;
pub mod square;
pub mod state;

pub use piece::{occupant_symbol, Color, Piece, PieceKind};
pub use position::{CastlingRight, Position};
pub use square::{Square, SQUARE_COUNT};
pub use state::Board;
