use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Battery, Participant, ScoreLevel};
use super::scoring::AssessmentResults;

/// Placeholder sent when the participant left the phone field empty.
pub const MISSING_PHONE: &str = "Non renseigné";

/// Outbound hook invoked once per completed session (sheet logging, CRM, ...).
///
/// Callers treat failures as best-effort: they are logged, never surfaced.
pub trait ResultsNotifier: Send + Sync {
    fn notify(&self, record: NotificationRecord) -> Result<(), NotifyError>;
}

/// Flat record posted to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub timestamp: String,
    /// Pretty-printed [`ResultsSnapshot`].
    pub results: String,
}

impl NotificationRecord {
    pub fn build(
        participant: &Participant,
        results: &AssessmentResults,
        answers: &AnswerMap,
        catalog: &QuestionCatalog,
        at: DateTime<Utc>,
    ) -> Result<Self, NotifyError> {
        let snapshot = ResultsSnapshot::build(results, answers, catalog);
        let results = serde_json::to_string_pretty(&snapshot)?;

        Ok(Self {
            first_name: participant.first_name.clone(),
            last_name: participant.last_name.clone(),
            email: participant.email.clone(),
            phone: participant
                .phone
                .clone()
                .unwrap_or_else(|| MISSING_PHONE.to_string()),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            results,
        })
    }

    /// Key/value pairs for form-encoded transports.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("timestamp", self.timestamp.clone()),
            ("results", self.results.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSnapshot {
    pub overall: OverallSnapshot,
    pub batteries: Vec<BatterySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallSnapshot {
    pub total_score: u32,
    pub total_percentage: u8,
    pub profile: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatterySnapshot {
    pub battery: Battery,
    pub score: u32,
    pub level: ScoreLevel,
    pub percentage: u8,
    pub answers: Vec<AnsweredQuestion>,
}

/// Question prompt paired with the text of the selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

impl ResultsSnapshot {
    pub fn build(
        results: &AssessmentResults,
        answers: &AnswerMap,
        catalog: &QuestionCatalog,
    ) -> Self {
        let batteries = results
            .scores
            .iter()
            .map(|score| BatterySnapshot {
                battery: score.battery,
                score: score.score,
                level: score.level,
                percentage: score.percentage,
                answers: catalog
                    .battery_questions(score.battery)
                    .into_iter()
                    .filter_map(|question| {
                        let points = answers.points(&question.id)?;
                        let option = question.option_for_points(points)?;
                        Some(AnsweredQuestion {
                            question: question.prompt.clone(),
                            answer: option.text.clone(),
                        })
                    })
                    .collect(),
            })
            .collect();

        Self {
            overall: OverallSnapshot {
                total_score: results.total_score,
                total_percentage: results.total_percentage,
                profile: results.profile.label(),
            },
            batteries,
        }
    }
}

/// Notifier that only records the submission in the logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl ResultsNotifier for LogNotifier {
    fn notify(&self, record: NotificationRecord) -> Result<(), NotifyError> {
        info!(
            first_name = %record.first_name,
            timestamp = %record.timestamp,
            "assessment results ready (no webhook configured)"
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("could not serialize results snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}
