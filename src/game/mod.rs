//! Client-side model of a hangman round.

mod letter;
mod round;

pub use letter::Letter;
pub use round::{GUESS_BUDGET, GuessOutcome, PLACEHOLDER, Round, RoundStatus};
