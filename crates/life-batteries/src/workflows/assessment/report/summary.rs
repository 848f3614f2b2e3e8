use super::super::domain::ScoreLevel;
use super::super::scoring::{AssessmentResults, BatteryScore};
use super::views::{BatteryScoreView, ReportSection, ResultsSummary};

const HIGHLIGHT_COUNT: usize = 3;

impl AssessmentResults {
    pub fn summary(&self) -> ResultsSummary {
        let priorities = lowest(self.scores.iter(), HIGHLIGHT_COUNT);
        let immediate_priorities = lowest(
            self.scores
                .iter()
                .filter(|score| score.level != ScoreLevel::Optimal),
            HIGHLIGHT_COUNT,
        );

        let mut by_score_desc: Vec<&BatteryScore> = self.scores.iter().collect();
        by_score_desc.sort_by(|a, b| b.score.cmp(&a.score));
        let strengths = by_score_desc
            .into_iter()
            .take(HIGHLIGHT_COUNT)
            .map(BatteryScoreView::from)
            .collect();

        ResultsSummary {
            priorities,
            strengths,
            immediate_priorities,
            critical_count: self.batteries_at(ScoreLevel::Critical).len(),
            unstable_count: self.batteries_at(ScoreLevel::Unstable).len(),
            optimal_count: self.batteries_at(ScoreLevel::Optimal).len(),
        }
    }

    /// Document order: the three lowest batteries first, the rest in canonical order.
    pub fn report_sections(&self) -> Vec<ReportSection> {
        let mut by_score: Vec<&BatteryScore> = self.scores.iter().collect();
        by_score.sort_by_key(|score| score.score);
        let highlighted: Vec<&BatteryScore> =
            by_score.into_iter().take(HIGHLIGHT_COUNT).collect();

        let remainder = self
            .scores
            .iter()
            .filter(|score| !highlighted.iter().any(|h| h.battery == score.battery));

        highlighted
            .iter()
            .copied()
            .map(|score| (true, score))
            .chain(remainder.map(|score| (false, score)))
            .enumerate()
            .map(|(index, (highlighted, score))| ReportSection {
                position: index + 1,
                highlighted,
                score: BatteryScoreView::from(score),
            })
            .collect()
    }
}

// Stable sort keeps canonical order among equal scores.
fn lowest<'a>(
    scores: impl Iterator<Item = &'a BatteryScore>,
    count: usize,
) -> Vec<BatteryScoreView> {
    let mut sorted: Vec<&BatteryScore> = scores.collect();
    sorted.sort_by_key(|score| score.score);
    sorted
        .into_iter()
        .take(count)
        .map(BatteryScoreView::from)
        .collect()
}
