//! Shell session state.
//!
//! Holds the selected codec between commands and writes the response for
//! each command to the given output.

use std::io::{self, Write};

use crate::board::Board;
use crate::codec::{BitVector, CodecKind};
use crate::protocol::fen::parse_fen;
use crate::protocol::grid::render_grid;
use crate::protocol::parser::Command;

/// Whether the main loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Mutable state of the `chessmap` shell.
#[derive(Debug, Default)]
pub struct Session {
    pub codec: CodecKind,
}

impl Session {
    /// Creates a session using the 4-bit codec.
    pub fn new() -> Self {
        Session::default()
    }

    /// Dispatches one command. Command failures are reported on stderr; only
    /// output errors are returned.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Width(kind) => self.codec = kind,
            Command::Encode { fen } => self.handle_encode(&fen, out)?,
            Command::Decode { bits } => self.handle_decode(&bits, out)?,
            Command::Show { bits } => self.handle_show(&bits, out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn handle_encode<W: Write>(&self, fen: &str, out: &mut W) -> io::Result<()> {
        match parse_fen(fen) {
            Ok(board) => writeln!(out, "{}", self.codec.encode(&board)),
            Err(e) => {
                eprintln!("encode: failed to parse FEN: {}", e);
                Ok(())
            }
        }
    }

    fn handle_decode<W: Write>(&self, bits: &BitVector, out: &mut W) -> io::Result<()> {
        match self.codec.decode_to_fen(bits) {
            Ok(fen) => writeln!(out, "{}", fen),
            Err(e) => {
                eprintln!("decode: {}", e);
                Ok(())
            }
        }
    }

    fn handle_show<W: Write>(&self, bits: &BitVector, out: &mut W) -> io::Result<()> {
        match self.codec.decode::<Board>(bits.as_slice()) {
            Ok(board) => {
                writeln!(out, "{}", render_grid(&board))?;
                writeln!(out, "end")
            }
            Err(e) => {
                eprintln!("show: {}", e);
                Ok(())
            }
        }
    }
}
