//! Seven-battery self-assessment: question catalog, session sequencing, scoring and reporting.

pub mod catalog;
pub mod domain;
pub mod notification;
pub mod ordering;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog, POINT_SCALE};
pub use domain::{
    AnswerMap, AnswerOption, Battery, Participant, ParticipantError, Question, QuestionId,
    ScoreLevel,
};
pub use notification::{LogNotifier, NotificationRecord, NotifyError, ResultsNotifier};
pub use ordering::{FixedOrdering, OrderingMode, QuestionOrdering, RandomOrdering, SeededOrdering};
pub use report::{BatteryScoreView, ReportSection, ResultsSummary};
pub use router::assessment_router;
pub use scoring::{AssessmentResults, BatteryScore, Profile, Scorer, ScoringConfig};
pub use service::{AssessmentError, AssessmentSession, CheckpointView, QuestionView, SessionStep};
pub use session::{
    AdvanceOutcome, BatteryProgress, RetreatOutcome, SessionError, SessionPhase,
    SessionStateMachine,
};
