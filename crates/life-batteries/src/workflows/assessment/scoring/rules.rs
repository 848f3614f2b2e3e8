use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerMap, Battery, ScoreLevel};
use super::config::ScoringConfig;
use super::BatteryScore;

pub(crate) fn score_battery(
    battery: Battery,
    answers: &AnswerMap,
    catalog: &QuestionCatalog,
    config: &ScoringConfig,
) -> BatteryScore {
    let (score, answered) = answers
        .iter()
        .filter(|(id, _)| catalog.battery_of(id) == Some(battery))
        .fold((0u32, 0usize), |(sum, count), (_, points)| {
            (sum + u32::from(points), count + 1)
        });

    let max_score = catalog.battery_max_points(battery);

    BatteryScore {
        battery,
        score,
        max_score,
        level: level_for(score, config),
        percentage: rounded_percentage(score, max_score),
        answered,
    }
}

pub(crate) fn level_for(score: u32, config: &ScoringConfig) -> ScoreLevel {
    if score <= config.critical_max {
        ScoreLevel::Critical
    } else if score <= config.unstable_max {
        ScoreLevel::Unstable
    } else {
        ScoreLevel::Optimal
    }
}

/// `round(part / whole * 100)` with halves rounded up, in integer arithmetic.
pub(crate) fn rounded_percentage(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part.min(whole));
    let whole = u64::from(whole);
    ((part * 200 + whole) / (whole * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries_are_pinned() {
        let config = ScoringConfig::default();
        assert_eq!(level_for(0, &config), ScoreLevel::Critical);
        assert_eq!(level_for(10, &config), ScoreLevel::Critical);
        assert_eq!(level_for(11, &config), ScoreLevel::Unstable);
        assert_eq!(level_for(20, &config), ScoreLevel::Unstable);
        assert_eq!(level_for(21, &config), ScoreLevel::Optimal);
        assert_eq!(level_for(30, &config), ScoreLevel::Optimal);
    }

    #[test]
    fn percentages_round_to_nearest_integer() {
        assert_eq!(rounded_percentage(105, 210), 50);
        assert_eq!(rounded_percentage(104, 210), 50);
        assert_eq!(rounded_percentage(37, 210), 18);
        assert_eq!(rounded_percentage(180, 210), 86);
        assert_eq!(rounded_percentage(13, 30), 43);
        assert_eq!(rounded_percentage(0, 30), 0);
        assert_eq!(rounded_percentage(30, 30), 100);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(3, 8), 38);
    }

    #[test]
    fn empty_denominator_yields_zero() {
        assert_eq!(rounded_percentage(4, 0), 0);
    }
}
