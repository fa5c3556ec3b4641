//! Text presenter for a human at a terminal.

use super::Presenter;
use crate::error::PresentationError;
use crate::game::{Letter, Round};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, instrument, warn};

/// Line-based console UI.
///
/// Prompts on `writer` and reads answers from `reader`, so the same code
/// drives stdin/stdout and in-memory buffers.
pub struct ConsolePresenter<R, W> {
    input: Lines<R>,
    writer: W,
}

impl ConsolePresenter<BufReader<Stdin>, std::io::Stdout> {
    /// Creates a presenter on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout())
    }
}

impl<R, W> ConsolePresenter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    /// Creates a presenter over the given input and output.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            input: reader.lines(),
            writer,
        }
    }

    /// Returns the output sink.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, PresentationError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.input
            .next_line()
            .await?
            .ok_or_else(|| PresentationError::new("Input closed while waiting for an answer"))
    }

    fn show(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Presenter for ConsolePresenter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    #[instrument(skip_all)]
    async fn elicit_guess(&mut self, _round: &Round) -> Result<Letter, PresentationError> {
        loop {
            let answer = self.ask("Letter? ").await?;
            if let Some(letter) = Letter::from_input(&answer) {
                debug!(%letter, "Guess entered");
                return Ok(letter);
            }
        }
    }

    fn display_game(&mut self, round: &Round) {
        let board = format!(
            "Word: {}\nGuesses remaining: {}",
            round.masked_word(),
            round.guesses_remaining()
        );
        self.show(&board);
    }

    fn congratulate_winner(&mut self, round: &Round) {
        let text = format!(
            "Word was: {}\nCongratulations! You got the word!",
            round.revealed_word().unwrap_or_default()
        );
        self.show(&text);
    }

    fn punish_loser(&mut self, round: &Round) {
        let text = format!(
            "Sorry! Too many guesses!\nWord was: {}\nHangman ... take a few \"practice swings\" (heh, heh)",
            round.revealed_word().unwrap_or_default()
        );
        self.show(&text);
    }

    #[instrument(skip_all)]
    async fn elicit_play_again(&mut self) -> Result<bool, PresentationError> {
        loop {
            let answer = self.ask("Another game (Y/N)? ").await?;
            match answer.trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
                Some('Y') => return Ok(true),
                Some('N') => {
                    self.show("Game Ended!");
                    return Ok(false);
                }
                _ => continue,
            }
        }
    }
}
