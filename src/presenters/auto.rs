//! Automatic player for unattended sessions.

use super::Presenter;
use crate::error::PresentationError;
use crate::game::{Letter, Round};
use tracing::{debug, info, instrument};

/// English letters, most frequent first.
pub const FREQUENCY_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Guesses untried letters by English frequency and plays a fixed number of rounds.
pub struct AutoPresenter {
    name: String,
    rounds: u32,
    rounds_played: u32,
    tried: Vec<Letter>,
}

impl AutoPresenter {
    /// Creates an automatic player that stops after `rounds` rounds.
    pub fn new(name: impl Into<String>, rounds: u32) -> Self {
        Self {
            name: name.into(),
            rounds,
            rounds_played: 0,
            tried: Vec::new(),
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rounds finished so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
}

#[async_trait::async_trait]
impl Presenter for AutoPresenter {
    #[instrument(skip_all)]
    async fn elicit_guess(&mut self, round: &Round) -> Result<Letter, PresentationError> {
        let next = FREQUENCY_ORDER
            .chars()
            .filter_map(Letter::new)
            .find(|letter| !self.tried.contains(letter))
            .ok_or_else(|| PresentationError::new("Every letter has already been tried"))?;

        self.tried.push(next);
        debug!(
            player = %self.name,
            letter = %next,
            masked = %round.masked_word(),
            "Auto player chose letter"
        );
        Ok(next)
    }

    fn display_game(&mut self, round: &Round) {
        info!(
            player = %self.name,
            word = %round.masked_word(),
            guesses_remaining = round.guesses_remaining(),
            "Board"
        );
    }

    fn congratulate_winner(&mut self, round: &Round) {
        info!(player = %self.name, word = ?round.revealed_word(), "Round won");
    }

    fn punish_loser(&mut self, round: &Round) {
        info!(player = %self.name, word = ?round.revealed_word(), "Round lost");
    }

    #[instrument(skip_all)]
    async fn elicit_play_again(&mut self) -> Result<bool, PresentationError> {
        self.rounds_played += 1;
        self.tried.clear();
        let again = self.rounds_played < self.rounds;
        debug!(
            player = %self.name,
            rounds_played = self.rounds_played,
            again,
            "Auto player deciding on another round"
        );
        Ok(again)
    }
}
