//! Parsing of typed moves.
//!
//! Malformed text never reaches the engine: it is rejected here and the
//! player is asked again.

use derive_more::{Display, Error};
use std::num::ParseIntError;
use tracing::instrument;

/// Why a line of input is not a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line did not split into exactly two parts.
    #[display("expected 2 values separated by {separator:?}, found {found}")]
    WrongArity {
        /// Number of parts the line split into.
        found: usize,
        /// Separator that was used to split.
        separator: char,
    },

    /// One of the two parts is not an integer.
    #[display("invalid integer {part:?}: {source}")]
    NotANumber {
        /// The offending text, trimmed.
        part: String,
        /// Underlying parse failure.
        source: ParseIntError,
    },
}

/// Parses `"row<sep>col"` into a pair of signed coordinates.
///
/// Whitespace around either number is ignored. Range checking is left to
/// the engine, so `"-1,7"` parses fine.
#[instrument]
pub fn parse_move(line: &str, separator: char) -> Result<(i64, i64), InputError> {
    let parts: Vec<&str> = line.trim().split(separator).collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongArity {
            found: parts.len(),
            separator,
        });
    };

    Ok((parse_coordinate(row)?, parse_coordinate(col)?))
}

fn parse_coordinate(part: &str) -> Result<i64, InputError> {
    let part = part.trim();
    part.parse().map_err(|source| InputError::NotANumber {
        part: part.to_string(),
        source,
    })
}
