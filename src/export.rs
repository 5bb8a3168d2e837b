//! Batch export of game positions to CSV.
//!
//! Reads game records as JSONL, one game per line:
//!
//! ```text
//! {"game_id": "5d41402abc4b2a76b9719d911017c592", "positions": ["<fen>", ...]}
//! ```
//!
//! `positions` holds the start position followed by the position after each
//! half-move. Every position becomes one CSV row: the vector bits, the game
//! id, and the half-move number (0 for the start position).
//!
//! Games are encoded in parallel on a rayon pool, in batches, and written in
//! input order.

use std::io::{BufRead, Write};
use std::time::Instant;

use rayon::prelude::*;
use serde::Deserialize;

use crate::codec::{BitVector, CodecError, CodecKind};
use crate::protocol::fen::{parse_fen, FenError};

/// One game as produced by the PGN reader.
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    /// Lowercase hex digest identifying the game.
    pub game_id: String,
    /// FEN of the start position and of every position after it.
    pub positions: Vec<String>,
}

/// Configuration for a batch export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Which codec produces the bit columns.
    pub codec: CodecKind,
    /// Number of worker threads (1 = encode on the calling thread).
    pub threads: usize,
    /// Games read and encoded per parallel batch.
    pub batch_size: usize,
    /// Report and skip bad games instead of aborting.
    pub skip_invalid: bool,
    /// Suppress progress output.
    pub quiet: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            codec: CodecKind::Dense4,
            threads: 4,
            batch_size: 256,
            skip_invalid: true,
            quiet: false,
        }
    }
}

/// Counts reported at the end of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub games_written: usize,
    pub games_skipped: usize,
    pub rows_written: usize,
}

/// Errors that can occur while exporting or reading back exported rows.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed game record: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("game '{game_id}', position {index}: {source}")]
    Fen {
        game_id: String,
        index: usize,
        #[source]
        source: FenError,
    },

    #[error("game id '{0}' is not a lowercase hex digest")]
    InvalidGameId(String),

    #[error("line {line}: not valid UTF-8: {source}")]
    InvalidUtf8 {
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("game '{0}' has no positions")]
    EmptyGame(String),

    #[error("expected {expected} columns, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("invalid move_half_number: '{0}'")]
    InvalidHalfMove(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Returns true for a non-empty string of lowercase hex digits.
pub fn is_hex_digest(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Builds the CSV header: `cm267_0,...,cm267_266,game_id,move_half_number`.
pub fn csv_header(kind: CodecKind) -> String {
    let mut columns: Vec<String> = (0..kind.len())
        .map(|i| format!("{}_{}", kind.name(), i))
        .collect();
    columns.push("game_id".to_string());
    columns.push("move_half_number".to_string());
    columns.join(",")
}

/// Formats one CSV row (without the trailing newline).
pub fn format_row(bits: &BitVector, game_id: &str, move_half_number: usize) -> String {
    let mut row = String::with_capacity(bits.len() * 2 + game_id.len() + 8);
    for &b in bits.as_slice() {
        row.push(if b { '1' } else { '0' });
        row.push(',');
    }
    row.push_str(game_id);
    row.push(',');
    row.push_str(&move_half_number.to_string());
    row
}

/// Parses an exported CSV row back into its vector, game id and half-move number.
pub fn parse_row(line: &str, kind: CodecKind) -> Result<(BitVector, String, usize), ExportError> {
    let fields: Vec<&str> = line.trim_end().split(',').collect();
    let expected = kind.len() + 2;
    if fields.len() != expected {
        return Err(ExportError::ColumnCount {
            expected,
            actual: fields.len(),
        });
    }

    let bit_fields = &fields[..kind.len()];
    let mut values = Vec::with_capacity(bit_fields.len());
    for (index, field) in bit_fields.iter().enumerate() {
        let value: u8 = field.trim().parse().map_err(|_| CodecError::InvalidBit {
            index,
            value: field.to_string(),
        })?;
        values.push(value);
    }
    let bits = BitVector::from_u8s(&values)?;

    let game_id = fields[kind.len()];
    if !is_hex_digest(game_id) {
        return Err(ExportError::InvalidGameId(game_id.to_string()));
    }
    let half = fields[kind.len() + 1];
    let move_half_number = half
        .trim()
        .parse()
        .map_err(|_| ExportError::InvalidHalfMove(half.to_string()))?;

    Ok((bits, game_id.to_string(), move_half_number))
}

/// Encodes every position of a game, in order.
pub fn encode_game(record: &GameRecord, kind: CodecKind) -> Result<Vec<BitVector>, ExportError> {
    if !is_hex_digest(&record.game_id) {
        return Err(ExportError::InvalidGameId(record.game_id.clone()));
    }
    if record.positions.is_empty() {
        return Err(ExportError::EmptyGame(record.game_id.clone()));
    }

    record
        .positions
        .iter()
        .enumerate()
        .map(|(index, fen)| {
            let board = parse_fen(fen).map_err(|source| ExportError::Fen {
                game_id: record.game_id.clone(),
                index,
                source,
            })?;
            Ok(kind.encode(&board))
        })
        .collect()
}

/// A game line that has been read but not yet encoded.
struct PendingGame {
    line: usize,
    record: Result<GameRecord, ExportError>,
}

/// Result of encoding one pending game.
type EncodedGame = Result<(String, Vec<BitVector>), ExportError>;

fn encode_pending(pending: PendingGame, kind: CodecKind) -> EncodedGame {
    let record = pending.record?;
    let vectors = encode_game(&record, kind)?;
    Ok((record.game_id, vectors))
}

/// Reads up to `batch_size` non-empty lines as pending games.
///
/// Lines are read as raw bytes so that a line of invalid UTF-8 becomes a bad
/// game instead of ending the export.
fn read_batch<R: BufRead>(
    input: &mut R,
    line_no: &mut usize,
    batch_size: usize,
) -> Result<Vec<PendingGame>, ExportError> {
    let mut batch = Vec::with_capacity(batch_size);
    let mut buf = Vec::new();
    while batch.len() < batch_size {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        *line_no += 1;
        let line = *line_no;
        let record = match std::str::from_utf8(&buf) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => serde_json::from_str::<GameRecord>(text)
                .map_err(|source| ExportError::Json { line, source }),
            Err(source) => Err(ExportError::InvalidUtf8 { line, source }),
        };
        batch.push(PendingGame { line, record });
    }
    Ok(batch)
}

/// Runs a batch export from JSONL `input` to CSV `out`.
///
/// Bad games are reported on stderr and skipped when `config.skip_invalid`
/// is set; otherwise the first bad game aborts the export.
pub fn run_export<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &ExportConfig,
) -> Result<ExportSummary, ExportError> {
    let start = Instant::now();
    let kind = config.codec;
    let pool = if config.threads > 1 {
        Some(
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .build()?,
        )
    } else {
        None
    };

    writeln!(out, "{}", csv_header(kind))?;

    let mut summary = ExportSummary::default();
    let mut line_no = 0;
    loop {
        let batch = read_batch(&mut input, &mut line_no, config.batch_size.max(1))?;
        if batch.is_empty() {
            break;
        }

        let line_numbers: Vec<usize> = batch.iter().map(|p| p.line).collect();
        let encoded: Vec<EncodedGame> = match &pool {
            Some(pool) => pool.install(|| {
                batch
                    .into_par_iter()
                    .map(|p| encode_pending(p, kind))
                    .collect()
            }),
            None => batch.into_iter().map(|p| encode_pending(p, kind)).collect(),
        };

        for (line, result) in line_numbers.into_iter().zip(encoded) {
            match result {
                Ok((game_id, vectors)) => {
                    for (half, bits) in vectors.iter().enumerate() {
                        writeln!(out, "{}", format_row(bits, &game_id, half))?;
                    }
                    summary.games_written += 1;
                    summary.rows_written += vectors.len();
                }
                Err(e) if config.skip_invalid => {
                    eprintln!("skipping game on line {}: {}", line, e);
                    summary.games_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if !config.quiet {
            eprintln!(
                "Exported {} games ({} rows, {} skipped) in {:.1}s",
                summary.games_written,
                summary.rows_written,
                summary.games_skipped,
                start.elapsed().as_secs_f64()
            );
        }
    }

    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::codec::Cm267;
    use std::io::Cursor;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

    fn quiet_config(threads: usize) -> ExportConfig {
        ExportConfig {
            threads,
            batch_size: 2,
            quiet: true,
            ..ExportConfig::default()
        }
    }

    fn game_line(id: &str, fens: &[&str]) -> String {
        serde_json::json!({ "game_id": id, "positions": fens }).to_string()
    }

    #[test]
    fn header_columns() {
        let header = csv_header(CodecKind::Dense4);
        let cols: Vec<&str> = header.split(',').collect();
        assert_eq!(cols.len(), 269);
        assert_eq!(cols[0], "cm267_0");
        assert_eq!(cols[266], "cm267_266");
        assert_eq!(cols[267], "game_id");
        assert_eq!(cols[268], "move_half_number");
        assert!(csv_header(CodecKind::OneHot12).starts_with("cm779_0,cm779_1,"));
    }

    #[test]
    fn row_roundtrip() {
        let bits = Cm267::encode(&Board::starting());
        let row = format_row(&bits, "abc123", 7);
        let (parsed, id, half) = parse_row(&row, CodecKind::Dense4).unwrap();
        assert_eq!(parsed, bits);
        assert_eq!(id, "abc123");
        assert_eq!(half, 7);
    }

    #[test]
    fn parse_row_rejects_wrong_width() {
        let bits = Cm267::encode(&Board::starting());
        let row = format_row(&bits, "ab", 0);
        assert!(matches!(
            parse_row(&row, CodecKind::OneHot12),
            Err(ExportError::ColumnCount { expected: 781, actual: 269 })
        ));
    }

    #[test]
    fn parse_row_rejects_non_hex_game_id() {
        let bits = Cm267::encode(&Board::starting());
        let row = format_row(&bits, "Game-1", 0);
        assert!(matches!(
            parse_row(&row, CodecKind::Dense4),
            Err(ExportError::InvalidGameId(id)) if id == "Game-1"
        ));
    }

    #[test]
    fn hex_digest_check() {
        assert!(is_hex_digest("0123456789abcdef"));
        assert!(!is_hex_digest(""));
        assert!(!is_hex_digest("ABCDEF"));
        assert!(!is_hex_digest("xyz"));
    }

    #[test]
    fn export_writes_one_row_per_position() {
        let input = format!(
            "{}\n\n{}\n",
            game_line("aa", &[START, AFTER_E4]),
            game_line("bb", &[START])
        );
        let mut out = Vec::new();
        let summary = run_export(Cursor::new(input), &mut out, &quiet_config(1)).unwrap();
        assert_eq!(
            summary,
            ExportSummary {
                games_written: 2,
                games_skipped: 0,
                rows_written: 3
            }
        );

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with(",aa,0"));
        assert!(lines[2].ends_with(",aa,1"));
        assert!(lines[3].ends_with(",bb,0"));
    }

    #[test]
    fn parallel_export_preserves_order() {
        let ids = ["01", "02", "03", "04", "05", "06", "07"];
        let input: String = ids
            .iter()
            .map(|id| game_line(id, &[START, AFTER_E4]) + "\n")
            .collect();

        let mut sequential = Vec::new();
        run_export(Cursor::new(input.clone()), &mut sequential, &quiet_config(1)).unwrap();
        let mut parallel = Vec::new();
        run_export(Cursor::new(input), &mut parallel, &quiet_config(3)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn bad_games_are_skipped() {
        let input = format!(
            "{}\nnot json\n{}\n{}\n{}\n",
            game_line("aa", &[START]),
            game_line("bb", &[START, "bogus"]),
            game_line("NOT-HEX", &[START]),
            game_line("cc", &[]),
        );
        let mut out = Vec::new();
        let summary = run_export(Cursor::new(input), &mut out, &quiet_config(2)).unwrap();
        assert_eq!(summary.games_written, 1);
        assert_eq!(summary.games_skipped, 4);
        assert_eq!(summary.rows_written, 1);
    }

    #[test]
    fn undecodable_line_is_skipped() {
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(game_line("aa", &[START, AFTER_E4]).as_bytes());
        input.push(b'\n');

        let mut out = Vec::new();
        let summary = run_export(Cursor::new(input.clone()), &mut out, &quiet_config(1)).unwrap();
        assert_eq!(summary.games_written, 1);
        assert_eq!(summary.games_skipped, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().last().unwrap().ends_with(",aa,1"));

        let config = ExportConfig {
            skip_invalid: false,
            ..quiet_config(1)
        };
        let err = run_export(Cursor::new(input), &mut Vec::new(), &config).unwrap_err();
        assert!(matches!(err, ExportError::InvalidUtf8 { line: 1, .. }));
    }

    #[test]
    fn strict_export_aborts() {
        let input = format!("{}\nnot json\n", game_line("aa", &[START]));
        let config = ExportConfig {
            skip_invalid: false,
            ..quiet_config(1)
        };
        let err = run_export(Cursor::new(input), &mut Vec::new(), &config).unwrap_err();
        assert!(matches!(err, ExportError::Json { line: 2, .. }));
    }

    #[test]
    fn encode_game_reports_position_index() {
        let record = GameRecord {
            game_id: "ff".to_string(),
            positions: vec![START.to_string(), "8/8 w - -".to_string()],
        };
        let err = encode_game(&record, CodecKind::OneHot12).unwrap_err();
        assert!(matches!(err, ExportError::Fen { index: 1, .. }));
    }
}
