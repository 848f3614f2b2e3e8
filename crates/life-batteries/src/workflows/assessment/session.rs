//! Questionnaire sequencing: pointer movement, answer capture and battery checkpoints.
//!
//! The machine owns the answer map for the lifetime of a session. Invalid
//! transitions are reported as [`SessionError`] and leave the state untouched.

use serde::Serialize;

use super::domain::{AnswerMap, Battery, Question, QuestionId};

/// Observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    /// Transient overlay after crossing into a new battery; `completed` is the battery just left.
    BatteryCheckpoint { completed: Battery },
    Completed,
}

impl SessionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            SessionPhase::NotStarted => "not_started",
            SessionPhase::InProgress => "in_progress",
            SessionPhase::BatteryCheckpoint { .. } => "battery_checkpoint",
            SessionPhase::Completed => "completed",
        }
    }
}

/// Result of a successful `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Moved,
    CheckpointEntered(Battery),
    CheckpointCleared,
    /// Returned exactly once, on the transition into `Completed`.
    Completed,
    /// Repeated completion trigger; nothing happened.
    AlreadyCompleted,
}

/// Result of a successful `retreat` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    Moved,
    CheckpointCleared,
    ReturnedToStart,
}

/// Position of the current question among its battery's questions seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatteryProgress {
    pub battery: Battery,
    /// 1-based count of this battery's questions along the traversed prefix.
    pub position: usize,
    /// Occurrences of the battery in the active ordering, which equals its catalog
    /// size whenever the ordering covers the whole catalog.
    pub total: usize,
}

#[derive(Debug, Default)]
pub struct SessionStateMachine {
    ordering: Vec<Question>,
    pointer: Option<usize>,
    answers: AnswerMap,
    checkpoint: Option<Battery>,
    completed: bool,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Completed
        } else if let Some(completed) = self.checkpoint {
            SessionPhase::BatteryCheckpoint { completed }
        } else if self.pointer.is_some() {
            SessionPhase::InProgress
        } else {
            SessionPhase::NotStarted
        }
    }

    /// Fix the question sequence for this run and move to the first question.
    pub fn start(&mut self, ordering: Vec<Question>) -> Result<(), SessionError> {
        self.expect_phase("start", |phase| matches!(phase, SessionPhase::NotStarted))?;
        if ordering.is_empty() {
            return Err(SessionError::EmptyOrdering);
        }

        self.ordering = ordering;
        self.pointer = Some(0);
        Ok(())
    }

    /// Store the selected points for the current question without moving.
    pub fn record_answer(
        &mut self,
        question_id: &QuestionId,
        points: u8,
    ) -> Result<(), SessionError> {
        self.expect_phase("record_answer", |phase| {
            matches!(phase, SessionPhase::InProgress)
        })?;

        let current = self.current_question().ok_or(SessionError::InvalidState {
            operation: "record_answer",
            phase: SessionPhase::NotStarted.label(),
        })?;
        if current.id != *question_id {
            return Err(SessionError::StaleAnswer {
                expected: current.id.clone(),
                received: question_id.clone(),
            });
        }
        if current.option_for_points(points).is_none() {
            return Err(SessionError::InvalidPoints {
                question: current.id.clone(),
                points,
            });
        }

        self.answers.record(question_id.clone(), points);
        Ok(())
    }

    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        match self.phase() {
            SessionPhase::NotStarted => Err(SessionError::InvalidState {
                operation: "advance",
                phase: SessionPhase::NotStarted.label(),
            }),
            SessionPhase::Completed => Ok(AdvanceOutcome::AlreadyCompleted),
            SessionPhase::BatteryCheckpoint { .. } => {
                self.checkpoint = None;
                Ok(AdvanceOutcome::CheckpointCleared)
            }
            SessionPhase::InProgress => {
                let pointer = self.pointer.unwrap_or_default();
                let last = self.ordering.len() - 1;

                if pointer < last {
                    let leaving = self.ordering[pointer].battery;
                    let entering = self.ordering[pointer + 1].battery;
                    self.pointer = Some(pointer + 1);

                    if leaving != entering {
                        self.checkpoint = Some(leaving);
                        Ok(AdvanceOutcome::CheckpointEntered(leaving))
                    } else {
                        Ok(AdvanceOutcome::Moved)
                    }
                } else {
                    let current = &self.ordering[pointer];
                    if !self.answers.contains(&current.id) {
                        return Err(SessionError::Unanswered(current.id.clone()));
                    }
                    self.completed = true;
                    Ok(AdvanceOutcome::Completed)
                }
            }
        }
    }

    pub fn retreat(&mut self) -> Result<RetreatOutcome, SessionError> {
        match self.phase() {
            SessionPhase::NotStarted | SessionPhase::Completed => Err(SessionError::InvalidState {
                operation: "retreat",
                phase: self.phase().label(),
            }),
            SessionPhase::BatteryCheckpoint { .. } => {
                self.checkpoint = None;
                Ok(RetreatOutcome::CheckpointCleared)
            }
            SessionPhase::InProgress => match self.pointer {
                Some(pointer) if pointer > 0 => {
                    self.pointer = Some(pointer - 1);
                    Ok(RetreatOutcome::Moved)
                }
                _ => {
                    // Answers survive so a fresh start can pick them back up.
                    self.pointer = None;
                    self.ordering.clear();
                    Ok(RetreatOutcome::ReturnedToStart)
                }
            },
        }
    }

    /// Drop the ordering, pointer, answers and completion flag.
    pub fn restart(&mut self) {
        self.ordering.clear();
        self.pointer = None;
        self.answers.clear();
        self.checkpoint = None;
        self.completed = false;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.pointer.and_then(|pointer| self.ordering.get(pointer))
    }

    pub fn is_current_answered(&self) -> bool {
        self.current_question()
            .map(|question| self.answers.contains(&question.id))
            .unwrap_or(false)
    }

    /// Counts occurrences along the traversed prefix, so interleaved orderings stay coherent.
    pub fn current_battery_progress(&self) -> Option<BatteryProgress> {
        let pointer = self.pointer?;
        let battery = self.ordering.get(pointer)?.battery;
        let position = self.ordering[..=pointer]
            .iter()
            .filter(|question| question.battery == battery)
            .count();
        let total = self
            .ordering
            .iter()
            .filter(|question| question.battery == battery)
            .count();

        Some(BatteryProgress {
            battery,
            position,
            total,
        })
    }

    /// Share of the sequence reached, 0 before start.
    pub fn progress_percent(&self) -> u8 {
        match self.pointer {
            Some(pointer) if !self.ordering.is_empty() => {
                let reached = (pointer + 1) * 100;
                let total = self.ordering.len();
                ((reached * 2 + total) / (total * 2)).min(100) as u8
            }
            _ => 0,
        }
    }

    /// Pointer into the active ordering; `None` before start.
    pub fn pointer(&self) -> Option<usize> {
        self.pointer
    }

    pub fn ordering(&self) -> &[Question] {
        &self.ordering
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: impl Fn(SessionPhase) -> bool,
    ) -> Result<(), SessionError> {
        let phase = self.phase();
        if allowed(phase) {
            Ok(())
        } else {
            Err(SessionError::InvalidState {
                operation,
                phase: phase.label(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot {operation} while session is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: &'static str,
    },
    #[error("question ordering must not be empty")]
    EmptyOrdering,
    #[error("answer for {received} rejected: current question is {expected}")]
    StaleAnswer {
        expected: QuestionId,
        received: QuestionId,
    },
    #[error("question {question} has no option worth {points} points")]
    InvalidPoints { question: QuestionId, points: u8 },
    #[error("question {0} must be answered before moving on")]
    Unanswered(QuestionId),
}
