use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Battery, Participant, ParticipantError, Question};
use super::notification::{NotificationRecord, ResultsNotifier};
use super::ordering::QuestionOrdering;
use super::scoring::{AssessmentResults, Scorer, ScoringConfig};
use super::session::{
    AdvanceOutcome, BatteryProgress, RetreatOutcome, SessionError, SessionPhase,
    SessionStateMachine,
};

/// Single-participant run composing the ordering source, state machine, scorer and notifier.
pub struct AssessmentSession<O, N> {
    catalog: Arc<QuestionCatalog>,
    ordering: Arc<O>,
    notifier: Arc<N>,
    scorer: Scorer,
    machine: SessionStateMachine,
    participant: Option<Participant>,
    results: Option<AssessmentResults>,
}

impl<O, N> AssessmentSession<O, N>
where
    O: QuestionOrdering + 'static,
    N: ResultsNotifier + 'static,
{
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        ordering: Arc<O>,
        notifier: Arc<N>,
        config: ScoringConfig,
    ) -> Self {
        let scorer = Scorer::new(catalog.clone(), config);
        Self {
            catalog,
            ordering,
            notifier,
            scorer,
            machine: SessionStateMachine::new(),
            participant: None,
            results: None,
        }
    }

    /// Validate the participant, draw the question order and show the first question.
    pub fn begin(&mut self, participant: Participant) -> Result<SessionStep, AssessmentError> {
        let participant = participant.validated()?;
        let ordering = self.ordering.arrange(&self.catalog);
        let question_count = ordering.len();
        self.machine.start(ordering)?;

        info!(
            first_name = %participant.first_name,
            questions = question_count,
            "assessment session started"
        );
        self.participant = Some(participant);
        Ok(self.step())
    }

    /// Select the option worth `points` for the question on screen.
    pub fn select(&mut self, points: u8) -> Result<SessionStep, AssessmentError> {
        let question_id = self
            .machine
            .current_question()
            .map(|question| question.id.clone())
            .ok_or(SessionError::InvalidState {
                operation: "record_answer",
                phase: SessionPhase::NotStarted.label(),
            })?;
        self.machine.record_answer(&question_id, points)?;
        Ok(self.step())
    }

    /// Move forward. Questions must be answered before leaving them.
    pub fn next(&mut self) -> Result<SessionStep, AssessmentError> {
        if self.machine.phase() == SessionPhase::InProgress && !self.machine.is_current_answered() {
            if let Some(question) = self.machine.current_question() {
                return Err(SessionError::Unanswered(question.id.clone()).into());
            }
        }

        match self.machine.advance()? {
            AdvanceOutcome::Completed => {
                self.complete();
            }
            AdvanceOutcome::CheckpointEntered(battery) => {
                debug!(battery = %battery, "battery checkpoint reached");
            }
            AdvanceOutcome::Moved
            | AdvanceOutcome::CheckpointCleared
            | AdvanceOutcome::AlreadyCompleted => {}
        }

        Ok(self.step())
    }

    pub fn previous(&mut self) -> Result<SessionStep, AssessmentError> {
        if self.machine.retreat()? == RetreatOutcome::ReturnedToStart {
            debug!("returned to intro screen");
        }
        Ok(self.step())
    }

    /// Discard answers, results and participant; back to the intro screen.
    pub fn restart(&mut self) {
        self.machine.restart();
        self.participant = None;
        self.results = None;
    }

    /// What the participant should currently see.
    pub fn step(&self) -> SessionStep {
        match self.machine.phase() {
            SessionPhase::NotStarted => SessionStep::Intro,
            SessionPhase::BatteryCheckpoint { completed } => {
                let total_batteries = self.catalog.all_batteries().len();
                SessionStep::Checkpoint(CheckpointView::new(completed, total_batteries))
            }
            SessionPhase::Completed => match &self.results {
                Some(results) => SessionStep::Results(results.clone()),
                None => SessionStep::Intro,
            },
            SessionPhase::InProgress => match self.question_view() {
                Some(view) => SessionStep::Question(view),
                None => SessionStep::Intro,
            },
        }
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    pub fn answers(&self) -> &AnswerMap {
        self.machine.answers()
    }

    pub fn machine(&self) -> &SessionStateMachine {
        &self.machine
    }

    fn complete(&mut self) {
        if self.results.is_some() {
            return;
        }

        let display_name = self
            .participant
            .as_ref()
            .map(|participant| participant.display_name().to_string())
            .unwrap_or_default();
        let results = self.scorer.score(&display_name, self.machine.answers());
        info!(
            total_score = results.total_score,
            total_percentage = results.total_percentage,
            profile = ?results.profile,
            "assessment completed"
        );

        if let Some(participant) = &self.participant {
            let outcome = NotificationRecord::build(
                participant,
                &results,
                self.machine.answers(),
                &self.catalog,
                Utc::now(),
            )
            .and_then(|record| self.notifier.notify(record));
            if let Err(error) = outcome {
                warn!(%error, "results notification failed");
            }
        }

        self.results = Some(results);
    }

    fn question_view(&self) -> Option<QuestionView> {
        let question = self.machine.current_question()?;
        let pointer = self.machine.pointer()?;
        let battery_progress = self.machine.current_battery_progress()?;

        Some(QuestionView {
            number: pointer + 1,
            total: self.machine.ordering().len(),
            progress_percent: self.machine.progress_percent(),
            battery_label: question.battery.label(),
            battery_progress,
            selected: self.machine.answers().points(&question.id),
            question: question.clone(),
        })
    }
}

/// Screen-level view of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "view", rename_all = "snake_case")]
pub enum SessionStep {
    Intro,
    Question(QuestionView),
    Checkpoint(CheckpointView),
    Results(AssessmentResults),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// 1-based position in the active ordering.
    pub number: usize,
    pub total: usize,
    pub progress_percent: u8,
    pub battery_label: &'static str,
    pub battery_progress: BatteryProgress,
    pub selected: Option<u8>,
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckpointView {
    pub battery: Battery,
    pub battery_label: &'static str,
    pub message: &'static str,
    /// Canonical position of the finished battery, shown as "n / total".
    pub completed_batteries: usize,
    pub total_batteries: usize,
}

impl CheckpointView {
    fn new(battery: Battery, total_batteries: usize) -> Self {
        Self {
            battery,
            battery_label: battery.label(),
            message: battery.checkpoint_message(),
            completed_batteries: battery.ordinal(),
            total_batteries,
        }
    }
}

/// Error raised by the assessment session.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Participant(#[from] ParticipantError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
