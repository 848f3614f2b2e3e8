use super::super::domain::{Battery, ScoreLevel};
use super::super::scoring::BatteryScore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatteryScoreView {
    pub battery: Battery,
    pub battery_label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub level: ScoreLevel,
    pub level_label: &'static str,
    pub level_emoji: &'static str,
    pub level_color: &'static str,
}

impl From<&BatteryScore> for BatteryScoreView {
    fn from(score: &BatteryScore) -> Self {
        Self {
            battery: score.battery,
            battery_label: score.battery.label(),
            emoji: score.battery.emoji(),
            color: score.battery.color(),
            score: score.score,
            max_score: score.max_score,
            percentage: score.percentage,
            level: score.level,
            level_label: score.level.label(),
            level_emoji: score.level.emoji(),
            level_color: score.level.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsSummary {
    /// Three lowest-scoring batteries, any level.
    pub priorities: Vec<BatteryScoreView>,
    /// Three highest-scoring batteries.
    pub strengths: Vec<BatteryScoreView>,
    /// Three lowest-scoring batteries that are not optimal.
    pub immediate_priorities: Vec<BatteryScoreView>,
    pub critical_count: usize,
    pub unstable_count: usize,
    pub optimal_count: usize,
}

/// One battery section of the downloadable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    /// 1-based position in the document.
    pub position: usize,
    /// Set for the lowest-scoring batteries surfaced ahead of canonical order.
    pub highlighted: bool,
    pub score: BatteryScoreView,
}
