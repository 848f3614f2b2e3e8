use std::sync::Arc;

use super::common::*;
use crate::workflows::assessment::domain::{Battery, ParticipantError, QuestionId};
use crate::workflows::assessment::ordering::FixedOrdering;
use crate::workflows::assessment::scoring::{Profile, ScoringConfig};
use crate::workflows::assessment::service::{AssessmentError, AssessmentSession, SessionStep};
use crate::workflows::assessment::session::{SessionError, SessionPhase};
use crate::workflows::assessment::{QuestionOrdering, ResultsNotifier};

/// Answer every question with `points`, stepping through checkpoints, until results show.
fn run_to_results<O, N>(session: &mut AssessmentSession<O, N>, points: u8) -> Vec<Battery>
where
    O: QuestionOrdering + 'static,
    N: ResultsNotifier + 'static,
{
    let mut checkpoints = Vec::new();
    loop {
        match session.step() {
            SessionStep::Question(_) => {
                session.select(points).expect("answer accepted");
                session.next().expect("moves forward");
            }
            SessionStep::Checkpoint(view) => {
                checkpoints.push(view.battery);
                session.next().expect("checkpoint clears");
            }
            SessionStep::Results(_) => return checkpoints,
            SessionStep::Intro => panic!("session fell back to intro"),
        }
    }
}

#[test]
fn begin_shows_first_question_with_progress() {
    let (mut session, _) = canonical_session();

    match session.begin(participant()).expect("session begins") {
        SessionStep::Question(view) => {
            assert_eq!(view.number, 1);
            assert_eq!(view.total, 35);
            assert_eq!(view.progress_percent, 3);
            assert_eq!(view.battery_label, "Physique");
            assert_eq!(view.battery_progress.position, 1);
            assert_eq!(view.battery_progress.total, 5);
            assert_eq!(view.question.id, QuestionId::from("phys-1"));
            assert_eq!(view.selected, None);
        }
        other => panic!("expected first question, got {other:?}"),
    }
}

#[test]
fn begin_rejects_invalid_participants() {
    let (mut session, _) = canonical_session();
    let mut participant = participant();
    participant.email = "camille.example.com".to_string();

    match session.begin(participant) {
        Err(AssessmentError::Participant(ParticipantError::InvalidEmail(email))) => {
            assert_eq!(email, "camille.example.com")
        }
        other => panic!("expected invalid email, got {other:?}"),
    }
    assert_eq!(session.step(), SessionStep::Intro);
}

#[test]
fn next_requires_an_answer_on_every_question() {
    let (mut session, _) = canonical_session();
    session.begin(participant()).expect("session begins");

    match session.next() {
        Err(AssessmentError::Session(SessionError::Unanswered(id))) => {
            assert_eq!(id, QuestionId::from("phys-1"))
        }
        other => panic!("expected unanswered error, got {other:?}"),
    }

    match session.select(4).expect("answer accepted") {
        SessionStep::Question(view) => assert_eq!(view.selected, Some(4)),
        other => panic!("expected question view, got {other:?}"),
    }
}

#[test]
fn checkpoint_view_reports_finished_battery() {
    let (mut session, _) = canonical_session();
    session.begin(participant()).expect("session begins");

    for _ in 0..5 {
        session.select(6).expect("answer accepted");
        session.next().expect("moves forward");
    }

    match session.step() {
        SessionStep::Checkpoint(view) => {
            assert_eq!(view.battery, Battery::Physical);
            assert_eq!(view.completed_batteries, 1);
            assert_eq!(view.total_batteries, 7);
            assert_eq!(view.message, Battery::Physical.checkpoint_message());
        }
        other => panic!("expected checkpoint, got {other:?}"),
    }
}

#[test]
fn completing_notifies_exactly_once() {
    let (mut session, notifier) = canonical_session();
    session.begin(participant()).expect("session begins");

    let checkpoints = run_to_results(&mut session, 6);
    assert_eq!(checkpoints, Battery::ALL[..6].to_vec());

    let results = session.results().cloned().expect("results computed");
    assert_eq!(results.display_name, "Camille");
    assert_eq!(results.total_score, 210);
    assert_eq!(results.profile, Profile::OptimalVitality);

    session.next().expect("repeat completion is harmless");
    assert_eq!(session.step(), SessionStep::Results(results));

    let records = notifier.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].email, "camille.martin@example.com");
    assert_eq!(records[0].phone, "Non renseigné");
}

#[test]
fn notifier_failure_does_not_block_results() {
    let catalog = catalog();
    let mut session = AssessmentSession::new(
        catalog.clone(),
        Arc::new(FixedOrdering::canonical(&catalog)),
        Arc::new(FailingNotifier),
        ScoringConfig::default(),
    );
    session.begin(participant()).expect("session begins");

    run_to_results(&mut session, 0);

    let results = session.results().expect("results still computed");
    assert_eq!(results.total_score, 0);
    assert_eq!(results.profile, Profile::CriticalExhaustion);
}

#[test]
fn previous_from_first_question_returns_to_intro() {
    let (mut session, _) = canonical_session();
    session.begin(participant()).expect("session begins");

    assert_eq!(session.previous().expect("retreats"), SessionStep::Intro);
    assert_eq!(session.machine().phase(), SessionPhase::NotStarted);
}

#[test]
fn restart_clears_participant_answers_and_results() {
    let (mut session, notifier) = canonical_session();
    session.begin(participant()).expect("session begins");
    run_to_results(&mut session, 4);

    session.restart();

    assert_eq!(session.step(), SessionStep::Intro);
    assert!(session.results().is_none());
    assert!(session.participant().is_none());
    assert!(session.answers().is_empty());

    session.begin(participant()).expect("second run begins");
    run_to_results(&mut session, 2);
    assert_eq!(notifier.records().len(), 2);
}
