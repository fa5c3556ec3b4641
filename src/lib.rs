//! Hangman client library - line-protocol hangman sessions
//!
//! This library drives a hangman round against a remote server that owns the
//! secret word. The client only knows what the server tells it: the word
//! length, which positions match each guess, and the word itself once the
//! round is over.
//!
//! # Architecture
//!
//! - **Transport**: [`LineChannel`] over TCP or any tokio stream
//! - **Protocol**: `NEW` / `GUESS <L>` / `QUIT` / `BYE` request lines
//! - **Game**: [`Round`] bookkeeping of the masked word and guess budget
//! - **Session**: the [`Session`] state machine tying them together
//! - **Presenters**: [`Presenter`] implementations for humans, bots, and tests
//!
//! # Example
//!
//! ```no_run
//! use hangman_client::{ClientConfig, ConsolePresenter, Session, TcpLineChannel};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::default().with_host("localhost");
//! let channel = TcpLineChannel::connect(config.host(), *config.port()).await?;
//! let session = Session::new(channel, Box::new(ConsolePresenter::stdio()), &config);
//! let summary = session.run().await?;
//! println!("won {} lost {}", summary.rounds_won, summary.rounds_lost);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod game;
mod presenters;
mod protocol;
mod session;
mod transport;

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError, DEFAULT_PORT, DEFAULT_SERVER};

// Crate-level exports - Errors
pub use error::{PresentationError, ProtocolError, SessionError, TransportError};

// Crate-level exports - Game model
pub use game::{GUESS_BUDGET, GuessOutcome, Letter, PLACEHOLDER, Round, RoundStatus};

// Crate-level exports - Presenters
pub use presenters::{
    AutoPresenter, ConsolePresenter, EventLog, FREQUENCY_ORDER, Presenter, PresenterEvent,
    ScriptedPresenter,
};

// Crate-level exports - Wire protocol
pub use protocol::{
    BANNER_LINES, MAX_WORD_LENGTH, Request, VerdictMode, parse_verdict, parse_word_length,
};

// Crate-level exports - Session state machine
pub use session::{Session, SessionState, SessionSummary};

// Crate-level exports - Transport
pub use transport::{LineChannel, StreamLineChannel, TcpLineChannel};
