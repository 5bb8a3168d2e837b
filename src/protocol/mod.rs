//! Text formats around the codec.
//!
//! FEN parsing and serialization for the crate's `Board`, symbol-grid
//! rendering, and the command parser for the `chessmap` shell.

pub mod fen;
pub mod grid;
pub mod parser;

pub use fen::{encode_fen, parse_fen, FenError};
pub use grid::{render_grid, to_symbol_grid};
pub use parser::{parse_command, Command};
