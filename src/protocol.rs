//! Hangman wire protocol: request lines and response parsing.
//!
//! The protocol is newline-terminated ASCII with one request outstanding at a
//! time:
//!
//! | Request          | Response                                   |
//! |------------------|--------------------------------------------|
//! | `NEW`            | one line, the decimal word length          |
//! | `GUESS <LETTER>` | one `true`/`false` line per word position  |
//! | `QUIT`           | one line, the secret word                  |
//! | `BYE`            | nothing                                    |

use crate::error::ProtocolError;
use crate::game::Letter;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::{instrument, warn};

/// Unsolicited greeting lines the server sends before the first request.
pub const BANNER_LINES: usize = 2;

/// Longest word length accepted from the server.
pub const MAX_WORD_LENGTH: usize = 1024;

/// A request line sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Request {
    /// Open a new round.
    #[display("NEW")]
    New,
    /// Ask which positions hold a letter.
    #[display("GUESS {}", _0)]
    Guess(Letter),
    /// Close the round and disclose the word.
    #[display("QUIT")]
    Quit,
    /// End the session.
    #[display("BYE")]
    Bye,
}

/// How verdict lines other than `true`/`false` are treated.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VerdictMode {
    /// Anything but `true` counts as a miss.
    #[default]
    Lenient,
    /// Anything but `true` or `false` is a protocol error.
    Strict,
}

/// Parses the server's answer to `NEW`.
#[instrument]
pub fn parse_word_length(line: Option<&str>) -> Result<usize, ProtocolError> {
    let line = line.ok_or_else(|| ProtocolError::new("Server closed before sending word length"))?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ProtocolError::new("Empty word length line"));
    }

    let length: i64 = trimmed.parse().map_err(|e| {
        ProtocolError::new(format!("Word length {:?} is not an integer: {}", trimmed, e))
    })?;

    if length <= 0 {
        return Err(ProtocolError::new(format!(
            "Word length must be positive, got {}",
            length
        )));
    }

    match usize::try_from(length) {
        Ok(length) if length <= MAX_WORD_LENGTH => Ok(length),
        _ => Err(ProtocolError::new(format!(
            "Word length {} exceeds the limit of {}",
            length, MAX_WORD_LENGTH
        ))),
    }
}

/// Parses one verdict line for the given word position.
#[instrument]
pub fn parse_verdict(
    line: Option<&str>,
    position: usize,
    mode: VerdictMode,
) -> Result<bool, ProtocolError> {
    let line = line.ok_or_else(|| {
        ProtocolError::new(format!(
            "Server closed before sending verdict for position {}",
            position
        ))
    })?;
    let token = line.trim();

    if token.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return Ok(false);
    }

    match mode {
        VerdictMode::Lenient => {
            warn!(token, position, "Unexpected verdict token, treating as false");
            Ok(false)
        }
        VerdictMode::Strict => Err(ProtocolError::new(format!(
            "Unexpected verdict {:?} for position {}",
            token, position
        ))),
    }
}
