//! Tests for the session state machine against a scripted server.

mod common;

use common::{BANNER, ScriptedChannel};
use hangman_client::{
    ClientConfig, PresenterEvent, ScriptedPresenter, Session, SessionError, SessionState,
    VerdictMode,
};

fn server(lines: &[&str]) -> ScriptedChannel {
    let mut script: Vec<&str> = BANNER.to_vec();
    script.extend_from_slice(lines);
    ScriptedChannel::new(&script)
}

fn session(channel: ScriptedChannel, presenter: ScriptedPresenter) -> Session<ScriptedChannel> {
    Session::new(channel, Box::new(presenter), &ClientConfig::default())
}

fn board(masked: &str, guesses_remaining: u32) -> PresenterEvent {
    PresenterEvent::Board {
        masked: masked.to_string(),
        guesses_remaining,
    }
}

#[tokio::test]
async fn test_full_winning_round() {
    let channel = server(&[
        "3", // NEW
        "true", "false", "false", // GUESS C
        "false", "true", "false", // GUESS A
        "false", "false", "true", // GUESS T
        "CAT",   // QUIT
    ]);
    let sent = channel.sent();
    let presenter = ScriptedPresenter::new("cat", [false]);
    let events = presenter.events();

    let summary = session(channel, presenter).run().await.expect("session completes");

    assert_eq!(summary.rounds_won, 1);
    assert_eq!(summary.rounds_lost, 0);
    assert_eq!(
        *sent.lock().unwrap(),
        vec!["NEW", "GUESS C", "GUESS A", "GUESS T", "QUIT", "BYE"]
    );
    assert_eq!(
        events.snapshot(),
        vec![
            board("***", 10),
            board("C**", 10),
            board("CA*", 10),
            PresenterEvent::Won {
                word: "CAT".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_partial_match_folds_into_masked_word() {
    let channel = server(&["5", "false", "true", "false", "false", "true"]);
    let mut session = session(channel, ScriptedPresenter::new("E", []));

    session.step().await.unwrap();
    assert_eq!(session.state(), SessionState::RoundStarting);

    session.step().await.unwrap();
    assert_eq!(session.state(), SessionState::AwaitingGuess);
    assert_eq!(session.round().unwrap().masked_word(), "*****");

    session.step().await.unwrap();
    let round = session.round().unwrap();
    assert_eq!(round.masked_word(), "*E**E");
    assert_eq!(round.unknown_count(), 3);
    assert_eq!(round.guesses_remaining(), 10);
    assert_eq!(session.state(), SessionState::AwaitingGuess);
}

#[tokio::test]
async fn test_last_miss_loses_round() {
    let mut lines = vec!["1"];
    lines.extend(std::iter::repeat_n("false", 10));
    lines.push("Q");
    let channel = server(&lines);
    let sent = channel.sent();
    let presenter = ScriptedPresenter::new("ABCDEFGHIJ", [false]);
    let events = presenter.events();
    let mut session = session(channel, presenter);

    // Open, start, then nine misses.
    for _ in 0..11 {
        session.step().await.unwrap();
    }
    assert_eq!(session.state(), SessionState::AwaitingGuess);
    assert_eq!(session.round().unwrap().guesses_remaining(), 1);

    session.step().await.unwrap();
    assert_eq!(session.state(), SessionState::Lost);
    let round = session.round().unwrap();
    assert_eq!(round.guesses_remaining(), 0);
    assert_eq!(round.unknown_count(), 1);

    session.step().await.unwrap();
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(session.round().is_none());
    assert_eq!(session.summary().rounds_lost, 1);
    assert_eq!(sent.lock().unwrap().last().map(String::as_str), Some("BYE"));
    assert_eq!(
        events.snapshot().last(),
        Some(&PresenterEvent::Lost {
            word: "Q".to_string()
        })
    );
}

#[tokio::test]
async fn test_revealing_last_position_wins_with_guesses_left() {
    let channel = server(&[
        "2", // NEW
        "false", "false", // GUESS Z
        "true", "false", // GUESS O
        "false", "true", // GUESS X
    ]);
    let mut session = session(channel, ScriptedPresenter::new("ZOX", []));

    for _ in 0..4 {
        session.step().await.unwrap();
    }
    let round = session.round().unwrap();
    assert_eq!(round.unknown_count(), 1);
    assert_eq!(round.guesses_remaining(), 9);

    session.step().await.unwrap();
    assert_eq!(session.state(), SessionState::Won);
    let round = session.round().unwrap();
    assert_eq!(round.unknown_count(), 0);
    assert_eq!(round.guesses_remaining(), 9);
    assert_eq!(round.masked_word(), "OX");
}

#[tokio::test]
async fn test_repeated_letter_costs_a_guess() {
    let channel = server(&[
        "3", // NEW
        "true", "false", "true", // GUESS E
        "true", "false", "true", // GUESS E again
    ]);
    let mut session = session(channel, ScriptedPresenter::new("EE", []));

    for _ in 0..3 {
        session.step().await.unwrap();
    }
    assert_eq!(session.round().unwrap().masked_word(), "E*E");
    assert_eq!(session.round().unwrap().guesses_remaining(), 10);

    session.step().await.unwrap();
    let round = session.round().unwrap();
    assert_eq!(round.masked_word(), "E*E");
    assert_eq!(round.unknown_count(), 1);
    assert_eq!(round.guesses_remaining(), 9);
}

#[tokio::test]
async fn test_new_round_resets_state() {
    let mut lines = vec!["1"];
    lines.extend(std::iter::repeat_n("false", 10));
    lines.extend(["Q", "4"]);
    let channel = server(&lines);
    let presenter = ScriptedPresenter::new("ABCDEFGHIJ", [true]);
    let mut session = session(channel, presenter);

    // Open, start, ten misses, end of round.
    for _ in 0..13 {
        session.step().await.unwrap();
    }
    assert_eq!(session.state(), SessionState::RoundStarting);

    session.step().await.unwrap();
    assert_eq!(session.state(), SessionState::AwaitingGuess);
    let round = session.round().unwrap();
    assert_eq!(round.word_length(), 4);
    assert_eq!(round.guesses_remaining(), 10);
    assert_eq!(round.unknown_count(), 4);
    assert_eq!(round.masked_word(), "****");
    assert_eq!(round.revealed_word(), None);
}

#[tokio::test]
async fn test_malformed_word_length_terminates_without_more_reads() {
    for bad in ["five", "", "0", "-2", "100000000000"] {
        let channel = server(&[bad, "false", "false"]);
        let sent = channel.sent();
        let reads = channel.reads();
        let mut session = session(channel, ScriptedPresenter::new("A", [true]));

        session.step().await.unwrap();
        let err = session.step().await.unwrap_err();

        assert!(matches!(err, SessionError::Protocol(_)), "{bad:?} gave {err}");
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(*reads.lock().unwrap(), 3);
        assert_eq!(*sent.lock().unwrap(), vec!["NEW", "BYE"]);

        // Terminated is absorbing.
        session.step().await.unwrap();
        assert_eq!(*reads.lock().unwrap(), 3);
    }
}

#[tokio::test]
async fn test_run_surfaces_protocol_error() {
    let channel = server(&["many"]);
    let result = session(channel, ScriptedPresenter::new("A", [])).run().await;
    assert!(matches!(result, Err(SessionError::Protocol(_))));
}

#[tokio::test]
async fn test_server_closing_mid_verdicts_is_protocol_error() {
    let channel = server(&["4", "true", "false"]);
    let mut session = session(channel, ScriptedPresenter::new("A", []));

    session.step().await.unwrap();
    session.step().await.unwrap();
    let err = session.step().await.unwrap_err();

    assert!(matches!(err, SessionError::Protocol(_)));
    assert_eq!(session.state(), SessionState::Terminated);
}

#[tokio::test]
async fn test_greeting_cut_short_is_protocol_error() {
    let channel = ScriptedChannel::new(&["Welcome"]);
    let mut session = session(channel, ScriptedPresenter::new("", []));

    let err = session.step().await.unwrap_err();
    assert!(matches!(err, SessionError::Protocol(_)));
    assert_eq!(session.state(), SessionState::Terminated);
}

#[tokio::test]
async fn test_transport_failure_terminates() {
    let channel = server(&["3"]).failing_writes();
    let mut session = session(channel, ScriptedPresenter::new("A", []));

    session.step().await.unwrap();
    let err = session.step().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(session.state(), SessionState::Terminated);
}

#[tokio::test]
async fn test_presenter_out_of_input_terminates_politely() {
    let channel = server(&["3"]);
    let sent = channel.sent();
    let mut session = session(channel, ScriptedPresenter::new("", []));

    session.step().await.unwrap();
    session.step().await.unwrap();
    let err = session.step().await.unwrap_err();

    assert!(matches!(err, SessionError::Presentation(_)));
    assert_eq!(session.state(), SessionState::Terminated);
    assert_eq!(*sent.lock().unwrap(), vec!["NEW", "BYE"]);
}

#[tokio::test]
async fn test_verdict_garbage_depends_on_mode() {
    let lines = ["2", "true", "maybe"];

    let mut lenient = session(server(&lines), ScriptedPresenter::new("A", []));
    for _ in 0..3 {
        lenient.step().await.unwrap();
    }
    assert_eq!(lenient.round().unwrap().masked_word(), "A*");

    let strict_config = ClientConfig::default().with_verdict_mode(VerdictMode::Strict);
    let mut strict = Session::new(
        server(&lines),
        Box::new(ScriptedPresenter::new("A", [])),
        &strict_config,
    );
    strict.step().await.unwrap();
    strict.step().await.unwrap();
    let err = strict.step().await.unwrap_err();
    assert!(matches!(err, SessionError::Protocol(_)));
}

#[tokio::test]
async fn test_banner_length_is_configurable() {
    let config = ClientConfig::default().with_banner_lines(0);
    let channel = ScriptedChannel::new(&["2"]);
    let mut session = Session::new(channel, Box::new(ScriptedPresenter::new("", [])), &config);

    session.step().await.unwrap();
    session.step().await.unwrap();
    assert_eq!(session.round().unwrap().word_length(), 2);
}
