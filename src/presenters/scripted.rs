//! Presenter that replays canned answers and records what it was shown.

use super::Presenter;
use crate::error::PresentationError;
use crate::game::{Letter, Round};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Something the session asked a presenter to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// The board was displayed.
    Board {
        /// Masked word at display time.
        masked: String,
        /// Guesses remaining at display time.
        guesses_remaining: u32,
    },
    /// A win was announced.
    Won {
        /// Word disclosed by the server.
        word: String,
    },
    /// A loss was announced.
    Lost {
        /// Word disclosed by the server.
        word: String,
    },
}

/// Shared, append-only record of presenter events.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<PresenterEvent>>>);

impl EventLog {
    fn lock(&self) -> MutexGuard<'_, Vec<PresenterEvent>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, event: PresenterEvent) {
        self.lock().push(event);
    }

    /// Returns a copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<PresenterEvent> {
        self.lock().clone()
    }
}

/// Plays back a fixed script of guesses and play-again answers.
///
/// Running out of script is a [`PresentationError`], the same as a human
/// closing their input.
#[derive(Debug)]
pub struct ScriptedPresenter {
    guesses: VecDeque<Letter>,
    answers: VecDeque<bool>,
    log: EventLog,
}

impl ScriptedPresenter {
    /// Creates a presenter that guesses the letters of `guesses` in order.
    ///
    /// Characters that are not letters are skipped.
    pub fn new(guesses: &str, answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            guesses: guesses.chars().filter_map(Letter::new).collect(),
            answers: answers.into_iter().collect(),
            log: EventLog::default(),
        }
    }

    /// Handle to the event log; stays valid after the presenter is moved into a session.
    pub fn events(&self) -> EventLog {
        self.log.clone()
    }
}

#[async_trait::async_trait]
impl Presenter for ScriptedPresenter {
    async fn elicit_guess(&mut self, _round: &Round) -> Result<Letter, PresentationError> {
        let letter = self
            .guesses
            .pop_front()
            .ok_or_else(|| PresentationError::new("Script has no more guesses"))?;
        debug!(%letter, "Scripted guess");
        Ok(letter)
    }

    fn display_game(&mut self, round: &Round) {
        self.log.push(PresenterEvent::Board {
            masked: round.masked_word(),
            guesses_remaining: round.guesses_remaining(),
        });
    }

    fn congratulate_winner(&mut self, round: &Round) {
        self.log.push(PresenterEvent::Won {
            word: round.revealed_word().unwrap_or_default().to_string(),
        });
    }

    fn punish_loser(&mut self, round: &Round) {
        self.log.push(PresenterEvent::Lost {
            word: round.revealed_word().unwrap_or_default().to_string(),
        });
    }

    async fn elicit_play_again(&mut self) -> Result<bool, PresentationError> {
        self.answers
            .pop_front()
            .ok_or_else(|| PresentationError::new("Script has no more play-again answers"))
    }
}
