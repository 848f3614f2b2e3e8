use super::common::*;
use crate::workflows::assessment::catalog::QuestionCatalog;
use crate::workflows::assessment::domain::{AnswerMap, Battery, QuestionId, ScoreLevel};
use crate::workflows::assessment::report::BatteryScoreView;
use crate::workflows::assessment::scoring::{Profile, Scorer, ScoringConfig};

fn scorer() -> Scorer {
    Scorer::new(catalog(), ScoringConfig::default())
}

#[test]
fn full_marks_yield_optimal_vitality() {
    let scorer = scorer();
    let results = scorer.score("Camille", &uniform_answers(scorer.catalog(), 6));

    assert_eq!(results.display_name, "Camille");
    assert_eq!(results.scores.len(), 7);
    assert!(results.scores.iter().all(|score| score.score == 30
        && score.percentage == 100
        && score.level == ScoreLevel::Optimal
        && score.answered == 5));
    assert_eq!(results.total_score, 210);
    assert_eq!(results.total_percentage, 100);
    assert_eq!(results.profile, Profile::OptimalVitality);
}

#[test]
fn zero_answers_yield_critical_exhaustion() {
    let scorer = scorer();
    let results = scorer.score("Camille", &uniform_answers(scorer.catalog(), 0));

    assert!(results
        .scores
        .iter()
        .all(|score| score.level == ScoreLevel::Critical && score.percentage == 0));
    assert_eq!(results.total_score, 0);
    assert_eq!(results.total_percentage, 0);
    assert_eq!(results.profile, Profile::CriticalExhaustion);
}

#[test]
fn one_drained_battery_stays_visible_in_a_strong_total() {
    let scorer = scorer();
    let results = scorer.score(
        "Camille",
        &one_weak_battery(scorer.catalog(), Battery::Emotional),
    );

    assert_eq!(results.total_score, 180);
    assert_eq!(results.total_percentage, 86);
    assert_eq!(results.profile, Profile::OptimalVitality);

    let critical = results.batteries_at(ScoreLevel::Critical);
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].battery, Battery::Emotional);
    assert_eq!(critical[0].score, 0);
}

#[test]
fn middling_answers_land_in_expected_bands() {
    let scorer = scorer();

    let unstable = scorer.score("Camille", &uniform_answers(scorer.catalog(), 4));
    assert!(unstable
        .scores
        .iter()
        .all(|score| score.score == 20 && score.level == ScoreLevel::Unstable));
    assert_eq!(unstable.total_percentage, 67);
    assert_eq!(unstable.profile, Profile::FragileBalance);

    let low = scorer.score("Camille", &uniform_answers(scorer.catalog(), 2));
    assert!(low
        .scores
        .iter()
        .all(|score| score.score == 10 && score.level == ScoreLevel::Critical));
    assert_eq!(low.total_percentage, 33);
    assert_eq!(low.profile, Profile::CriticalExhaustion);
}

/// Answers reaching exactly `total` (even), filling questions with 6 in catalog order.
fn answers_totalling(catalog: &QuestionCatalog, total: u32) -> AnswerMap {
    let mut remaining = total;
    catalog
        .questions()
        .iter()
        .map(|question| {
            let points = remaining.min(6);
            remaining -= points;
            (question.id.clone(), points as u8)
        })
        .collect()
}

#[test]
fn profile_bands_use_the_rounded_total() {
    let scorer = scorer();

    // 146 / 210 = 69.52%
    let results = scorer.score("Camille", &answers_totalling(scorer.catalog(), 146));
    assert_eq!(results.total_score, 146);
    assert_eq!(results.total_percentage, 70);
    assert_eq!(results.profile, Profile::StableEnergy);

    // 178 / 210 = 84.76%
    let results = scorer.score("Camille", &answers_totalling(scorer.catalog(), 178));
    assert_eq!(results.total_score, 178);
    assert_eq!(results.total_percentage, 85);
    assert_eq!(results.profile, Profile::OptimalVitality);

    // 144 / 210 = 68.57%
    let results = scorer.score("Camille", &answers_totalling(scorer.catalog(), 144));
    assert_eq!(results.total_percentage, 69);
    assert_eq!(results.profile, Profile::FragileBalance);
}

#[test]
fn missing_and_unknown_entries_are_ignored() {
    let scorer = scorer();
    let answers: AnswerMap = [
        (QuestionId::from("phys-1"), 6),
        (QuestionId::from("phys-2"), 6),
        (QuestionId::from("ghost-1"), 6),
    ]
    .into_iter()
    .collect();

    let results = scorer.score("Camille", &answers);
    let physical = results.battery(Battery::Physical).expect("physical scored");

    assert_eq!(physical.score, 12);
    assert_eq!(physical.answered, 2);
    assert_eq!(physical.level, ScoreLevel::Unstable);
    assert_eq!(physical.percentage, 40);
    assert_eq!(results.total_score, 12);
    assert_eq!(
        results.battery(Battery::Mental).map(|score| score.answered),
        Some(0)
    );
}

#[test]
fn scoring_is_deterministic() {
    let scorer = scorer();
    let answers = one_weak_battery(scorer.catalog(), Battery::Spiritual);

    assert_eq!(
        scorer.score("Camille", &answers),
        scorer.score("Camille", &answers)
    );
}

#[test]
fn custom_thresholds_shift_levels() {
    let config = ScoringConfig {
        critical_max: 20,
        ..ScoringConfig::default()
    };
    let scorer = Scorer::new(catalog(), config);

    let results = scorer.score("Camille", &uniform_answers(scorer.catalog(), 4));
    assert_eq!(results.batteries_at(ScoreLevel::Critical).len(), 7);
    assert_eq!(results.summary().immediate_priorities.len(), 3);
}

#[test]
fn summary_orders_priorities_and_strengths() {
    let scorer = scorer();
    let results = scorer.score(
        "Camille",
        &one_weak_battery(scorer.catalog(), Battery::Identity),
    );
    let summary = results.summary();

    let batteries = |views: &[BatteryScoreView]| {
        views.iter().map(|view| view.battery).collect::<Vec<_>>()
    };

    assert_eq!(
        batteries(&summary.priorities),
        vec![Battery::Identity, Battery::Physical, Battery::Mental]
    );
    assert_eq!(
        batteries(&summary.strengths),
        vec![Battery::Physical, Battery::Mental, Battery::Emotional]
    );
    assert_eq!(batteries(&summary.immediate_priorities), vec![Battery::Identity]);
    assert_eq!(summary.critical_count, 1);
    assert_eq!(summary.unstable_count, 0);
    assert_eq!(summary.optimal_count, 6);
}

#[test]
fn report_sections_lead_with_three_lowest() {
    let scorer = scorer();
    let results = scorer.score(
        "Camille",
        &one_weak_battery(scorer.catalog(), Battery::Relational),
    );
    let sections = results.report_sections();

    let order: Vec<Battery> = sections.iter().map(|section| section.score.battery).collect();
    assert_eq!(
        order,
        vec![
            Battery::Relational,
            Battery::Physical,
            Battery::Mental,
            Battery::Emotional,
            Battery::Identity,
            Battery::Professional,
            Battery::Spiritual,
        ]
    );
    assert_eq!(
        sections
            .iter()
            .filter(|section| section.highlighted)
            .count(),
        3
    );
    assert_eq!(sections[0].position, 1);
    assert_eq!(sections[0].score.level_label, "CRITIQUE");
}
