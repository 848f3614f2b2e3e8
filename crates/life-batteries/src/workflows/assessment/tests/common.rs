use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::catalog::QuestionCatalog;
use crate::workflows::assessment::domain::{AnswerMap, Battery, Participant, Question, QuestionId};
use crate::workflows::assessment::notification::{
    NotificationRecord, NotifyError, ResultsNotifier,
};
use crate::workflows::assessment::ordering::FixedOrdering;
use crate::workflows::assessment::scoring::ScoringConfig;
use crate::workflows::assessment::service::AssessmentSession;

pub(super) fn catalog() -> Arc<QuestionCatalog> {
    Arc::new(QuestionCatalog::standard())
}

pub(super) fn participant() -> Participant {
    Participant {
        first_name: "Camille".to_string(),
        last_name: "Martin".to_string(),
        email: "camille.martin@example.com".to_string(),
        phone: None,
    }
}

pub(super) fn questions(catalog: &QuestionCatalog, ids: &[&str]) -> Vec<Question> {
    ids.iter()
        .map(|id| {
            catalog
                .question(&QuestionId::from(*id))
                .cloned()
                .expect("question exists in standard catalog")
        })
        .collect()
}

/// Same points for every question of the catalog.
pub(super) fn uniform_answers(catalog: &QuestionCatalog, points: u8) -> AnswerMap {
    catalog
        .questions()
        .iter()
        .map(|question| (question.id.clone(), points))
        .collect()
}

/// Full marks everywhere except `weak`, which answers 0 across the board.
pub(super) fn one_weak_battery(catalog: &QuestionCatalog, weak: Battery) -> AnswerMap {
    catalog
        .questions()
        .iter()
        .map(|question| {
            let points = if question.battery == weak { 0 } else { 6 };
            (question.id.clone(), points)
        })
        .collect()
}

#[derive(Clone, Default)]
pub(super) struct MemoryNotifier {
    records: Arc<Mutex<Vec<NotificationRecord>>>,
}

impl MemoryNotifier {
    pub(super) fn records(&self) -> Vec<NotificationRecord> {
        self.records.lock().expect("notifier mutex").clone()
    }
}

impl ResultsNotifier for MemoryNotifier {
    fn notify(&self, record: NotificationRecord) -> Result<(), NotifyError> {
        self.records.lock().expect("notifier mutex").push(record);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl ResultsNotifier for FailingNotifier {
    fn notify(&self, _record: NotificationRecord) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("webhook unreachable".to_string()))
    }
}

pub(super) type CanonicalSession = AssessmentSession<FixedOrdering, MemoryNotifier>;

pub(super) fn canonical_session() -> (CanonicalSession, MemoryNotifier) {
    let catalog = catalog();
    let notifier = MemoryNotifier::default();
    let session = AssessmentSession::new(
        catalog.clone(),
        Arc::new(FixedOrdering::canonical(&catalog)),
        Arc::new(notifier.clone()),
        ScoringConfig::default(),
    );
    (session, notifier)
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
