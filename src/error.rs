//! Session error types.
//!
//! Each failure class carries the caller location it was raised from, so the
//! operator log points at the originating operation without a backtrace.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// The line channel could not be read from or written to.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error: {} at {}:{}", message, file, line)]
pub struct TransportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for TransportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// The server sent a response that is absent, malformed, or out of contract.
#[derive(Debug, Clone, Display, Error)]
#[display("Protocol error: {} at {}:{}", message, file, line)]
pub struct ProtocolError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ProtocolError {
    /// Creates a new protocol error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The presenter could not obtain the input the session asked for.
#[derive(Debug, Clone, Display, Error)]
#[display("Presentation error: {} at {}:{}", message, file, line)]
pub struct PresentationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PresentationError {
    /// Creates a new presentation error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PresentationError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Any failure that ends a session.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// Channel I/O failed.
    #[display("{}", _0)]
    Transport(TransportError),
    /// Server response violated the protocol.
    #[display("{}", _0)]
    Protocol(ProtocolError),
    /// Presenter could not supply input.
    #[display("{}", _0)]
    Presentation(PresentationError),
}

impl SessionError {
    /// Returns true if the channel itself is broken.
    pub fn is_transport(&self) -> bool {
        matches!(self, SessionError::Transport(_))
    }
}
