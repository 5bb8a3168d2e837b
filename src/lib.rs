//! chessmap library.
//!
//! Converts chess positions to fixed-width binary feature vectors and back.
//! Exposes the board representation, the codec, the text formats around it,
//! and the batch exporter for use by the binaries and integration tests.

pub mod board;
pub mod codec;
pub mod export;
pub mod protocol;
pub mod session;
