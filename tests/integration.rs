//! Integration tests for the chessmap shell binary.
//!
//! Tests full shell sessions by spawning the process, sending commands via
//! stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the shell and collects stdout lines.
fn run_shell(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_chessmap");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start chessmap");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const OPEN_GAME_FEN: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2";

#[test]
fn isready_replies_readyok() {
    let lines = run_shell(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn encode_produces_267_bits_by_default() {
    let lines = run_shell(&[&format!("encode {}", START_FEN), "quit"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 267);
    assert!(lines[0].chars().all(|c| c == '0' || c == '1'));
}

#[test]
fn encode_produces_779_bits_with_width_12() {
    let lines = run_shell(&["width 12", &format!("encode {}", START_FEN), "quit"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 779);
}

#[test]
fn encode_decode_session_roundtrip() {
    let encoded = run_shell(&[&format!("encode {}", OPEN_GAME_FEN)]);
    let decoded = run_shell(&[&format!("decode {}", encoded[0]), "quit"]);
    // Counters are not carried by the vector.
    assert_eq!(
        decoded,
        vec!["rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 1"]
    );
}

#[test]
fn show_renders_grid_then_end() {
    let encoded = run_shell(&["width 12", &format!("encode {}", OPEN_GAME_FEN)]);
    let lines = run_shell(&["width 12", &format!("show {}", encoded[0]), "quit"]);
    assert_eq!(
        lines,
        vec![
            "r n b q k b n r",
            "p p p p . p p p",
            ". . . . . . . .",
            ". . . . p . . .",
            ". . . . P . . .",
            ". . . . . . . .",
            "P P P P . P P P",
            "R N B Q K B N R",
            "end",
        ]
    );
}

#[test]
fn decode_with_wrong_width_is_ignored() {
    let encoded = run_shell(&[&format!("encode {}", START_FEN)]);
    let lines = run_shell(&["width 12", &format!("decode {}", encoded[0]), "isready"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn malformed_commands_are_ignored() {
    let lines = run_shell(&[
        "bogus",
        "width 7",
        "encode not-a-fen w - -",
        "decode 0102",
        "isready",
        "quit",
    ]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn quit_stops_processing() {
    let lines = run_shell(&["quit", "isready"]);
    assert!(lines.is_empty());
}
