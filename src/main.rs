//! chessmap -- a line-oriented shell around the position codec.
//!
//! This binary reads commands from stdin and writes responses to stdout:
//! `width <4|12>`, `encode <fen>`, `decode <bits>`, `show <bits>`,
//! `isready`, `quit`.

use std::io::{self, BufRead};

use chessmap::protocol::parser::parse_command;
use chessmap::session::{Flow, Session};

/// Runs the main loop, reading commands from stdin and writing responses
/// to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match session.handle(cmd, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                eprintln!("output error: {}", e);
                break;
            }
        }
    }
}
