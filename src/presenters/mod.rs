//! Presenter trait and implementations.
//!
//! A presenter is everything the session needs from whoever is playing:
//! a guess, a yes/no on another round, and somewhere to show the board and
//! the outcome.

mod auto;
mod console;
mod scripted;

pub use auto::{AutoPresenter, FREQUENCY_ORDER};
pub use console::ConsolePresenter;
pub use scripted::{EventLog, PresenterEvent, ScriptedPresenter};

use crate::error::PresentationError;
use crate::game::{Letter, Round};

/// Player-facing side of a session.
#[async_trait::async_trait]
pub trait Presenter: Send {
    /// Obtains the next guess, blocking until a valid letter is available.
    async fn elicit_guess(&mut self, round: &Round) -> Result<Letter, PresentationError>;

    /// Shows the masked word and the remaining guesses.
    fn display_game(&mut self, round: &Round);

    /// Announces a win, including the revealed word.
    fn congratulate_winner(&mut self, round: &Round);

    /// Announces a loss, including the revealed word.
    fn punish_loser(&mut self, round: &Round);

    /// Asks whether to play another round.
    async fn elicit_play_again(&mut self) -> Result<bool, PresentationError>;
}
