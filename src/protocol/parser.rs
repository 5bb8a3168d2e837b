//! Shell command parser.
//!
//! Parses incoming lines from raw text into structured `Command` variants
//! that the `chessmap` main loop can dispatch on.

use crate::codec::{BitVector, CodecKind};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the shell must reply `readyok`.
    IsReady,

    /// Select the piece-code width for subsequent commands.
    Width(CodecKind),

    /// Encode a FEN position: `encode <fen>`.
    Encode { fen: String },

    /// Decode a bit string and print the FEN: `decode <bits>`.
    Decode { bits: BitVector },

    /// Decode a bit string and print the symbol grid: `show <bits>`.
    Show { bits: BitVector },

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "width" => parse_width(&tokens),
        "encode" => parse_encode(&tokens),
        "decode" => parse_bits(&tokens).map(|bits| Command::Decode { bits }),
        "show" => parse_bits(&tokens).map(|bits| Command::Show { bits }),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `width <4|12>`.
fn parse_width(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed width: expected 'width <4|12>'");
        return None;
    }
    let width: usize = match tokens[1].parse() {
        Ok(w) => w,
        Err(_) => {
            eprintln!("invalid width value: '{}'", tokens[1]);
            return None;
        }
    };
    match CodecKind::from_width(width) {
        Ok(kind) => Some(Command::Width(kind)),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    }
}

/// Parses `encode <fen>`. The FEN spans the rest of the line.
fn parse_encode(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 5 {
        eprintln!("malformed encode: expected 'encode <fen>'");
        return None;
    }
    Some(Command::Encode {
        fen: tokens[1..].join(" "),
    })
}

/// Parses the single bit-string argument of `decode` and `show`.
fn parse_bits(tokens: &[&str]) -> Option<BitVector> {
    if tokens.len() != 2 {
        eprintln!("malformed {}: expected '{} <bits>'", tokens[0], tokens[0]);
        return None;
    }
    match tokens[1].parse() {
        Ok(bits) => Some(bits),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    }
}
