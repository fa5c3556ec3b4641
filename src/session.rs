//! Session state machine driving the hangman protocol.
//!
//! A [`Session`] owns the channel, the presenter, and the live [`Round`]. Each
//! call to [`Session::step`] handles exactly one state:
//!
//! ```text
//! Idle ─► RoundStarting ─► AwaitingGuess ─┬─► Won ──┬─► RoundStarting
//!                              ▲   │      └─► Lost ─┘
//!                              └───┘                 └─► Terminated
//! ```
//!
//! End-of-round handling, including the play-again question, finishes before
//! the next round is opened. Any error moves the session straight to
//! `Terminated`.

use crate::config::ClientConfig;
use crate::error::{ProtocolError, SessionError, TransportError};
use crate::game::{Letter, Round, RoundStatus};
use crate::presenters::Presenter;
use crate::protocol::{Request, VerdictMode, parse_verdict, parse_word_length};
use crate::transport::LineChannel;
use tracing::{debug, error, info, instrument, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SessionState {
    /// Connected; the greeting has not been read yet.
    Idle,
    /// About to request a new word.
    RoundStarting,
    /// Waiting for the player's next guess.
    AwaitingGuess,
    /// Every position was revealed.
    Won,
    /// The guess budget ran out.
    Lost,
    /// The session is over. Absorbing.
    Terminated,
}

impl SessionState {
    /// Name of the operation a step in this state performs.
    pub fn operation(self) -> &'static str {
        match self {
            SessionState::Idle => "open_session",
            SessionState::RoundStarting => "start_new_game",
            SessionState::AwaitingGuess => "process_guess",
            SessionState::Won | SessionState::Lost => "handle_end_game",
            SessionState::Terminated => "terminated",
        }
    }
}

/// Round tallies for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that ended in a win.
    pub rounds_won: u32,
    /// Rounds that ended in a loss.
    pub rounds_lost: u32,
}

/// One connection's worth of hangman rounds.
pub struct Session<C> {
    channel: C,
    presenter: Box<dyn Presenter>,
    state: SessionState,
    round: Option<Round>,
    verdict_mode: VerdictMode,
    banner_lines: usize,
    summary: SessionSummary,
}

impl<C: LineChannel> Session<C> {
    /// Creates a session over an open channel.
    pub fn new(channel: C, presenter: Box<dyn Presenter>, config: &ClientConfig) -> Self {
        Self {
            channel,
            presenter,
            state: SessionState::Idle,
            round: None,
            verdict_mode: *config.verdict_mode(),
            banner_lines: *config.banner_lines(),
            summary: SessionSummary::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The live round, if one has been opened and the session has not ended.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Rounds won and lost so far.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Steps until the session terminates.
    #[instrument(skip_all)]
    pub async fn run(mut self) -> Result<SessionSummary, SessionError> {
        info!("Session started");
        while self.state != SessionState::Terminated {
            self.step().await?;
        }
        info!(
            rounds_won = self.summary.rounds_won,
            rounds_lost = self.summary.rounds_lost,
            "Session ended"
        );
        Ok(self.summary)
    }

    /// Handles the current state once.
    ///
    /// On error the failure is logged, the session is terminated, and the
    /// error is returned.
    pub async fn step(&mut self) -> Result<(), SessionError> {
        let state = self.state;
        let result = match state {
            SessionState::Idle => self.open().await,
            SessionState::RoundStarting => self.start_new_game().await,
            SessionState::AwaitingGuess => match self.elicit_guess().await {
                Ok(letter) => self.process_guess(letter).await,
                Err(err) => Err(err),
            },
            SessionState::Won | SessionState::Lost => self.handle_end_game().await,
            SessionState::Terminated => Ok(()),
        };

        if let Err(err) = &result {
            error!(operation = state.operation(), error = %err, "Session failed");
            self.terminate(!err.is_transport()).await;
        }
        result
    }

    #[instrument(skip(self))]
    async fn open(&mut self) -> Result<(), SessionError> {
        for _ in 0..self.banner_lines {
            let line = self.channel.read_line().await?.ok_or_else(|| {
                ProtocolError::new("Server closed the connection during its greeting")
            })?;
            debug!(line = %line, "Discarding greeting");
        }
        self.state = SessionState::RoundStarting;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn start_new_game(&mut self) -> Result<(), SessionError> {
        self.send(Request::New).await?;
        let line = self.channel.read_line().await?;
        let word_length = parse_word_length(line.as_deref())?;
        debug!(word_length, "New round");

        let round = self.round.insert(Round::new(word_length));
        self.presenter.display_game(round);
        self.state = SessionState::AwaitingGuess;
        Ok(())
    }

    async fn elicit_guess(&mut self) -> Result<Letter, SessionError> {
        let Some(round) = self.round.as_ref() else {
            unreachable!("awaiting a guess without a live round");
        };
        let letter = self.presenter.elicit_guess(round).await?;
        debug!(%letter, "Letter guessed");
        Ok(letter)
    }

    #[instrument(skip(self))]
    async fn process_guess(&mut self, letter: Letter) -> Result<(), SessionError> {
        let Some(word_length) = self.round.as_ref().map(Round::word_length) else {
            unreachable!("processing a guess without a live round");
        };

        self.send(Request::Guess(letter)).await?;
        let mut verdicts = Vec::with_capacity(word_length);
        for position in 0..word_length {
            let line = self.channel.read_line().await?;
            verdicts.push(parse_verdict(line.as_deref(), position, self.verdict_mode)?);
        }

        let Some(round) = self.round.as_mut() else {
            unreachable!("round dropped while reading verdicts");
        };
        let outcome = round.apply_verdicts(letter, &verdicts)?;
        debug!(word_so_far = %round.masked_word(), revealed = outcome.revealed, "Guess processed");

        self.state = match outcome.status {
            RoundStatus::Won => SessionState::Won,
            RoundStatus::Lost => SessionState::Lost,
            RoundStatus::InProgress => {
                self.presenter.display_game(round);
                SessionState::AwaitingGuess
            }
        };
        Ok(())
    }

    #[instrument(skip(self), fields(state = %self.state))]
    async fn handle_end_game(&mut self) -> Result<(), SessionError> {
        self.send(Request::Quit).await?;
        let word = self
            .channel
            .read_line()
            .await?
            .ok_or_else(|| ProtocolError::new("Server closed before disclosing the word"))?;

        let Some(round) = self.round.as_mut() else {
            unreachable!("ending a round that was never opened");
        };
        round.reveal(word.trim().to_string());
        info!(word = ?round.revealed_word(), outcome = %self.state, "Round over");

        match self.state {
            SessionState::Won => {
                self.summary.rounds_won += 1;
                self.presenter.congratulate_winner(round);
            }
            SessionState::Lost => {
                self.summary.rounds_lost += 1;
                self.presenter.punish_loser(round);
            }
            other => unreachable!("end of round handled in state {}", other),
        }

        if self.presenter.elicit_play_again().await? {
            self.state = SessionState::RoundStarting;
        } else {
            self.terminate(true).await;
        }
        Ok(())
    }

    async fn send(&mut self, request: Request) -> Result<(), TransportError> {
        debug!(%request, "Sending request");
        self.channel.write_line(&request.to_string()).await
    }

    /// Enters `Terminated`, optionally saying goodbye to the server first.
    async fn terminate(&mut self, say_goodbye: bool) {
        self.state = SessionState::Terminated;
        self.round = None;
        if say_goodbye {
            if let Err(e) = self.send(Request::Bye).await {
                warn!(error = %e, "Failed to send goodbye");
            }
        }
    }
}
