//! Round bookkeeping: the masked word and the guess budget.
//!
//! A [`Round`] is the client's entire knowledge of the current word. It is
//! built from the server's word length, folds per-position verdicts into the
//! masked word, and decides win/loss from two counters:
//!
//! - `unknown_count` falls by the number of placeholders a guess reveals
//! - `guesses_remaining` falls by one when a guess reveals nothing
//!
//! The round is won exactly when `unknown_count` hits zero, and lost when the
//! budget runs out first.

use super::Letter;
use crate::error::ProtocolError;
use derive_new::new;
use tracing::{debug, instrument};

/// Misses allowed per round.
pub const GUESS_BUDGET: u32 = 10;

/// Character shown for a position that has not been revealed yet.
pub const PLACEHOLDER: char = '*';

/// Whether a round is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// Unknown positions and guesses both remain.
    InProgress,
    /// Every position has been revealed.
    Won,
    /// The guess budget ran out with positions still unknown.
    Lost,
}

/// Result of folding one guess into the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct GuessOutcome {
    /// Placeholder positions this guess revealed.
    pub revealed: usize,
    /// Round status after the guess.
    pub status: RoundStatus,
}

/// The locally known state of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word_length: usize,
    masked_word: Vec<char>,
    guesses_remaining: u32,
    unknown_count: usize,
    revealed_word: Option<String>,
}

impl Round {
    /// Starts a fresh round for a word of `word_length` letters.
    ///
    /// `word_length` must be at least 1; the protocol layer rejects anything
    /// smaller before a round is built.
    #[instrument]
    pub fn new(word_length: usize) -> Self {
        debug_assert!(word_length > 0, "rounds need at least one position");
        debug!("Initializing round");
        Self {
            word_length,
            masked_word: vec![PLACEHOLDER; word_length],
            guesses_remaining: GUESS_BUDGET,
            unknown_count: word_length,
            revealed_word: None,
        }
    }

    /// Number of positions in the word.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Misses still allowed.
    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    /// Positions still showing the placeholder.
    pub fn unknown_count(&self) -> usize {
        self.unknown_count
    }

    /// The masked word, e.g. `*E**E`.
    pub fn masked_word(&self) -> String {
        self.masked_word.iter().collect()
    }

    /// The server's disclosure of the word, once the round has ended.
    pub fn revealed_word(&self) -> Option<&str> {
        self.revealed_word.as_deref()
    }

    /// Current status, derived from the counters.
    pub fn status(&self) -> RoundStatus {
        if self.unknown_count == 0 {
            RoundStatus::Won
        } else if self.guesses_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Folds the server's verdicts for `letter` into the masked word.
    ///
    /// `verdicts` holds one entry per position, left to right. Only positions
    /// that are still placeholders are revealed, so repeating a letter that is
    /// already on the board reveals nothing and costs a guess.
    #[instrument(skip(self, verdicts), fields(masked = %self.masked_word()))]
    pub fn apply_verdicts(
        &mut self,
        letter: Letter,
        verdicts: &[bool],
    ) -> Result<GuessOutcome, ProtocolError> {
        debug_assert_eq!(self.status(), RoundStatus::InProgress);

        if verdicts.len() != self.word_length {
            return Err(ProtocolError::new(format!(
                "Expected {} verdicts for a {}-letter word, got {}",
                self.word_length,
                self.word_length,
                verdicts.len()
            )));
        }

        let mut revealed = 0;
        for (slot, &hit) in self.masked_word.iter_mut().zip(verdicts) {
            if hit && *slot == PLACEHOLDER {
                *slot = letter.as_char();
                revealed += 1;
            }
        }

        self.unknown_count -= revealed;
        if revealed == 0 {
            self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        }

        let status = self.status();
        debug!(
            revealed,
            unknown = self.unknown_count,
            guesses_remaining = self.guesses_remaining,
            ?status,
            "Guess applied"
        );
        Ok(GuessOutcome::new(revealed, status))
    }

    /// Records the word as disclosed by the server at round end.
    #[instrument(skip(self))]
    pub fn reveal(&mut self, word: String) {
        self.revealed_word = Some(word);
    }
}
