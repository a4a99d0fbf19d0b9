//! Tests for the drill session state machine.

mod common;

use common::{
    GAME_OVER_DELAY, RecordingSpeaker, SHAKE, ScriptedChallenges, config, int, session_with,
};
use std::time::{Duration, Instant};
use strictly_numeri::{Challenge, Feedback, GameSession, Level, Phase, SubmitOutcome};

#[test]
fn test_session_starts_fresh_and_speaks() {
    let session = session_with([int(7)]);

    assert_eq!(session.score(), 0);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.level(), Level::FIRST);
    assert_eq!(session.feedback(), Feedback::Idle);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.speaker().texts(), vec!["7"]);
}

#[test]
fn test_correct_word_answer() {
    let mut session = session_with([int(7)]);

    let outcome = session.submit_answer("sette", Instant::now());

    assert_eq!(
        outcome,
        SubmitOutcome::Correct {
            points: 10,
            multiplier: 1,
            level_up: None,
        }
    );
    assert_eq!(session.feedback(), Feedback::Correct);
    assert_eq!(session.score(), 10);
    assert_eq!(session.streak(), 1);
    assert_eq!(session.lives(), 3);
}

#[test]
fn test_blank_input_ignored() {
    let mut session = session_with([int(7)]);

    assert_eq!(session.submit_answer("   ", Instant::now()), SubmitOutcome::Ignored);
    assert_eq!(session.feedback(), Feedback::Idle);
    assert_eq!(session.lives(), 3);
}

#[test]
fn test_second_submission_ignored_until_continue() {
    let mut session = session_with([int(7), int(3)]);
    let now = Instant::now();

    session.submit_answer("7", now);
    assert_eq!(session.submit_answer("7", now), SubmitOutcome::Ignored);
    assert_eq!(session.score(), 10);

    assert!(session.continue_game());
    assert_eq!(session.feedback(), Feedback::Idle);
    assert_eq!(*session.current(), int(3));
    assert_eq!(session.speaker().texts(), vec!["7", "3"]);
}

#[test]
fn test_continue_requires_feedback() {
    let mut session = session_with([int(7)]);
    assert!(!session.continue_game());
}

#[test]
fn test_incorrect_answer_costs_life_and_streak() {
    let mut session = session_with([int(7), int(8), int(9)]);
    let now = Instant::now();

    session.submit_answer("7", now);
    session.continue_game();
    let outcome = session.submit_answer("nove", now);

    assert_eq!(
        outcome,
        SubmitOutcome::Incorrect {
            lives: 2,
            game_over_pending: false,
        }
    );
    assert_eq!(session.streak(), 0);
    assert_eq!(session.max_streak(), 1);
    assert_eq!(session.feedback(), Feedback::Incorrect);
    assert!(session.is_shaking(now));
    assert!(!session.is_shaking(now + SHAKE));
}

#[test]
fn test_last_life_schedules_game_over() {
    let mut session = session_with([int(5)]);
    let start = Instant::now();

    session.submit_answer("1", start);
    session.continue_game();
    session.submit_answer("2", start);
    session.continue_game();
    let outcome = session.submit_answer("3", start);

    assert_eq!(
        outcome,
        SubmitOutcome::Incorrect {
            lives: 0,
            game_over_pending: true,
        }
    );
    assert_eq!(session.feedback(), Feedback::Incorrect);
    assert_eq!(session.phase(), Phase::Playing);
    assert!(!session.continue_game());

    // Feedback stays up for the delay.
    assert!(!session.tick(start + Duration::from_millis(999)));
    assert_eq!(session.phase(), Phase::Playing);

    assert!(session.tick(start + GAME_OVER_DELAY));
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(!session.tick(start + GAME_OVER_DELAY * 2));
}

#[test]
fn test_game_over_rejects_everything_but_restart() {
    let mut session = session_with([int(5)]);
    let start = Instant::now();
    for _ in 0..3 {
        session.submit_answer("x", start);
        session.continue_game();
    }
    session.tick(start + GAME_OVER_DELAY);
    assert_eq!(session.phase(), Phase::GameOver);

    assert_eq!(session.submit_answer("5", start), SubmitOutcome::Ignored);
    assert!(!session.replay());
    assert!(!session.continue_game());
}

#[test]
fn test_multiplier_uses_streak_before_answer() {
    let mut session = session_with([int(1)]);
    let now = Instant::now();
    let mut awards = Vec::new();

    for _ in 0..5 {
        match session.submit_answer("1", now) {
            SubmitOutcome::Correct { points, .. } => awards.push(points),
            other => panic!("expected correct, got {:?}", other),
        }
        session.continue_game();
    }

    // Streaks 0,1,2 score 1x; streaks 3,4 score 2x.
    assert_eq!(awards, vec![10, 10, 10, 20, 20]);
    assert_eq!(session.streak(), 5);
    assert_eq!(session.score(), 70);
}

#[test]
fn test_decimal_challenge_scores_double() {
    let mut session = session_with([Challenge::decimal(1, 55).unwrap()]);

    let outcome = session.submit_answer("uno virgola cinquantacinque", Instant::now());

    assert!(matches!(outcome, SubmitOutcome::Correct { points: 20, .. }));
}

#[test]
fn test_level_up_at_fifty_and_next_draw_uses_new_level() {
    let mut session = session_with([int(1)]);
    let now = Instant::now();

    let mut level_ups = Vec::new();
    for _ in 0..4 {
        if let SubmitOutcome::Correct {
            level_up: Some(level),
            ..
        } = session.submit_answer("1", now)
        {
            level_ups.push(level);
        }
        session.continue_game();
    }

    // 10 + 10 + 10 + 20 = 50
    assert_eq!(session.score(), 50);
    assert_eq!(level_ups, vec![Level::new(2).unwrap()]);
    assert_eq!(session.source().levels_seen.last(), Some(&Level::new(2).unwrap()));
}

#[test]
fn test_level_never_decreases_and_stops_at_max() {
    let mut session = session_with([int(1)]);
    let now = Instant::now();

    let mut previous = session.level();
    while session.score() < 600 {
        session.submit_answer("1", now);
        assert!(session.level() >= previous);
        previous = session.level();
        session.continue_game();
    }
    assert_eq!(session.level(), Level::MAX);
}

#[test]
fn test_restart_resets_everything() {
    let mut session = session_with([int(1), int(2), int(3), int(4)]);
    let start = Instant::now();

    session.submit_answer("1", start);
    session.continue_game();
    for _ in 0..3 {
        session.submit_answer("x", start);
        session.continue_game();
    }
    session.restart();

    assert_eq!(session.score(), 0);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.max_streak(), 0);
    assert_eq!(session.lives(), 3);
    assert_eq!(session.level(), Level::FIRST);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.feedback(), Feedback::Idle);
    assert_eq!(session.source().levels_seen.last(), Some(&Level::FIRST));

    // The pending game over was cancelled.
    assert!(!session.tick(start + GAME_OVER_DELAY * 2));
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn test_replay_speaks_with_comma_separator() {
    let mut session = session_with([Challenge::decimal(12, 5).unwrap()]);

    assert!(session.replay());

    let spoken = session.speaker().spoken.borrow();
    assert_eq!(spoken.len(), 2);
    assert_eq!(spoken[1].text(), "12,5");
    assert_eq!(spoken[1].locale(), "it-IT");
    assert_eq!(*spoken[1].rate(), 0.8);
}

#[test]
fn test_replay_disabled_without_speech() {
    let mut session = GameSession::start(
        ScriptedChallenges::repeating(int(4)),
        RecordingSpeaker::unavailable(),
        config(),
    );

    assert!(!session.speech_available());
    assert!(!session.replay());
    assert!(session.speaker().texts().is_empty());
    assert!(!session.snapshot().speech_available);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut session = session_with([int(23)]);
    session.submit_answer("ventitre", Instant::now());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.score, 10);
    assert_eq!(snapshot.feedback, Feedback::Correct);
    assert_eq!(snapshot.digits, "23");
    assert_eq!(snapshot.words, "ventitré");
    assert_eq!(snapshot.last_award, Some(10));
    assert_eq!(snapshot.level_cap, 10);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["feedback"], "correct");
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["level"], 1);
}
