use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Battery, Question, QuestionId};
use super::ordering::{OrderingMode, QuestionOrdering, RandomOrdering, SeededOrdering};
use super::report::{ReportSection, ResultsSummary};
use super::scoring::{AssessmentResults, Scorer};
use super::service::AssessmentError;
use super::session::SessionError;

/// Router exposing the catalog, ordering and scoring. Holds no session state.
pub fn assessment_router(scorer: Arc<Scorer>) -> Router {
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler))
        .route("/api/v1/assessment/order", post(order_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .with_state(scorer)
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub batteries: Vec<BatteryView>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatteryView {
    pub battery: Battery,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub question_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub mode: OrderingMode,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub mode: OrderingMode,
    pub question_ids: Vec<QuestionId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    pub display_name: String,
    pub answers: AnswerMap,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub results: AssessmentResults,
    pub summary: ResultsSummary,
    pub report_sections: Vec<ReportSection>,
}

pub(crate) async fn catalog_handler(State(scorer): State<Arc<Scorer>>) -> Json<CatalogView> {
    let catalog = scorer.catalog();
    let batteries = catalog
        .all_batteries()
        .into_iter()
        .map(|battery| BatteryView {
            battery,
            label: battery.label(),
            emoji: battery.emoji(),
            color: battery.color(),
            question_count: catalog.battery_questions(battery).len(),
        })
        .collect();

    Json(CatalogView {
        batteries,
        questions: catalog.questions().to_vec(),
    })
}

pub(crate) async fn order_handler(
    State(scorer): State<Arc<Scorer>>,
    Json(request): Json<OrderRequest>,
) -> Json<OrderResponse> {
    let ordered = match request.seed {
        Some(seed) => SeededOrdering::new(request.mode, seed).arrange(scorer.catalog()),
        None => RandomOrdering::new(request.mode).arrange(scorer.catalog()),
    };

    Json(OrderResponse {
        mode: request.mode,
        question_ids: ordered.into_iter().map(|question| question.id).collect(),
    })
}

pub(crate) async fn score_handler(
    State(scorer): State<Arc<Scorer>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    check_points(scorer.catalog(), &request.answers)?;

    let results = scorer.score(request.display_name.trim(), &request.answers);
    Ok(Json(ScoreResponse {
        summary: results.summary(),
        report_sections: results.report_sections(),
        results,
    }))
}

/// Known questions must carry points one of their options offers; unknown ids are ignored.
fn check_points(catalog: &QuestionCatalog, answers: &AnswerMap) -> Result<(), AssessmentError> {
    for (id, points) in answers.iter() {
        if let Some(question) = catalog.question(id) {
            if question.option_for_points(points).is_none() {
                return Err(SessionError::InvalidPoints {
                    question: id.clone(),
                    points,
                }
                .into());
            }
        }
    }
    Ok(())
}
