mod config;
mod profile;
mod rules;

pub use config::{ProfileBands, ScoringConfig};
pub use profile::Profile;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Battery, ScoreLevel};

/// Stateless reducer from an answer map to leveled results.
///
/// Total over any input: entries for unknown questions are ignored and
/// unanswered questions contribute nothing to their battery's sum.
#[derive(Debug, Clone)]
pub struct Scorer {
    catalog: Arc<QuestionCatalog>,
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(catalog: Arc<QuestionCatalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionCatalog::standard()), ScoringConfig::default())
    }

    pub fn score(&self, display_name: &str, answers: &AnswerMap) -> AssessmentResults {
        let scores: Vec<BatteryScore> = self
            .catalog
            .all_batteries()
            .into_iter()
            .map(|battery| rules::score_battery(battery, answers, &self.catalog, &self.config))
            .collect();

        let total_score: u32 = scores.iter().map(|score| score.score).sum();
        let total_max: u32 = scores.iter().map(|score| score.max_score).sum();
        let total_percentage = rules::rounded_percentage(total_score, total_max);
        let profile = Profile::from_percentage(total_percentage, &self.config.profile_bands);

        AssessmentResults {
            display_name: display_name.to_string(),
            scores,
            total_score,
            total_percentage,
            profile,
        }
    }

    pub fn catalog(&self) -> &Arc<QuestionCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

/// Per-battery reduction of the answer map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryScore {
    pub battery: Battery,
    pub score: u32,
    /// Highest reachable score (30 in the standard catalog).
    pub max_score: u32,
    pub level: ScoreLevel,
    pub percentage: u8,
    /// Number of this battery's questions present in the answer map.
    pub answered: usize,
}

/// Immutable outcome handed to presentation and notification collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub display_name: String,
    /// One entry per battery, canonical order.
    pub scores: Vec<BatteryScore>,
    pub total_score: u32,
    pub total_percentage: u8,
    pub profile: Profile,
}

impl AssessmentResults {
    pub fn battery(&self, battery: Battery) -> Option<&BatteryScore> {
        self.scores.iter().find(|score| score.battery == battery)
    }

    pub fn batteries_at(&self, level: ScoreLevel) -> Vec<&BatteryScore> {
        self.scores
            .iter()
            .filter(|score| score.level == level)
            .collect()
    }
}
