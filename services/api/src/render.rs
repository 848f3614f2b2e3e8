use chrono::Local;
use life_batteries::workflows::assessment::{
    AssessmentResults, BatteryScoreView, QuestionCatalog, ReportSection,
};
use std::io::{self, Write};

const GAUGE_WIDTH: usize = 20;

pub(crate) fn render_catalog<W: Write>(out: &mut W, catalog: &QuestionCatalog) -> io::Result<()> {
    writeln!(out, "Les 7 batteries de vie ({} questions)", catalog.len())?;
    for battery in catalog.all_batteries() {
        writeln!(out)?;
        writeln!(out, "{} {}", battery.emoji(), battery.label())?;
        for question in catalog.battery_questions(battery) {
            writeln!(out, "  [{}] {}", question.id, question.prompt)?;
            for option in &question.options {
                writeln!(out, "      {} pts  {}", option.points, option.text)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn render_results<W: Write>(out: &mut W, results: &AssessmentResults) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Résultats de {} ({})",
        results.display_name,
        Local::now().format("%d/%m/%Y")
    )?;
    writeln!(
        out,
        "Score global : {} pts | {}% | {}",
        results.total_score,
        results.total_percentage,
        results.profile.label()
    )?;

    let summary = results.summary();
    writeln!(
        out,
        "{} critique(s), {} instable(s), {} optimale(s)",
        summary.critical_count, summary.unstable_count, summary.optimal_count
    )?;

    writeln!(out)?;
    for section in results.report_sections() {
        render_section(out, &section)?;
    }

    if !summary.immediate_priorities.is_empty() {
        writeln!(out)?;
        writeln!(out, "Priorités immédiates : {}", labels(&summary.immediate_priorities))?;
    }
    writeln!(out, "Points forts : {}", labels(&summary.strengths))?;
    Ok(())
}

fn render_section<W: Write>(out: &mut W, section: &ReportSection) -> io::Result<()> {
    let score = &section.score;
    let marker = if section.highlighted { "!" } else { " " };
    writeln!(
        out,
        "{marker} {} {:<16} {:>2}/{:<2} {} {:>3}% {} {}",
        score.emoji,
        score.battery_label,
        score.score,
        score.max_score,
        gauge(score.percentage),
        score.percentage,
        score.level_emoji,
        score.level_label
    )
}

fn gauge(percentage: u8) -> String {
    let filled = (usize::from(percentage) * GAUGE_WIDTH + 50) / 100;
    let filled = filled.min(GAUGE_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(GAUGE_WIDTH - filled))
}

fn labels(views: &[BatteryScoreView]) -> String {
    views
        .iter()
        .map(|view| view.battery_label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_batteries::workflows::assessment::{AnswerMap, Scorer};

    #[test]
    fn gauge_scales_to_width() {
        assert_eq!(gauge(0), format!("[{}]", ".".repeat(GAUGE_WIDTH)));
        assert_eq!(gauge(100), format!("[{}]", "#".repeat(GAUGE_WIDTH)));
        assert_eq!(gauge(50).matches('#').count(), 10);
    }

    #[test]
    fn results_list_every_battery_and_profile() {
        let scorer = Scorer::standard();
        let answers: AnswerMap = scorer
            .catalog()
            .questions()
            .iter()
            .map(|question| (question.id.clone(), 6))
            .collect();
        let results = scorer.score("Camille", &answers);

        let mut out = Vec::new();
        render_results(&mut out, &results).expect("render succeeds");
        let text = String::from_utf8(out).expect("utf8 output");

        assert!(text.contains("Résultats de Camille"));
        assert!(text.contains("210 pts | 100%"));
        assert!(text.contains(results.profile.label()));
        assert_eq!(text.matches("OPTIMAL").count(), 7);
        assert!(!text.contains("Priorités immédiates"));
    }

    #[test]
    fn catalog_lists_all_questions() {
        let catalog = QuestionCatalog::standard();
        let mut out = Vec::new();
        render_catalog(&mut out, &catalog).expect("render succeeds");
        let text = String::from_utf8(out).expect("utf8 output");

        assert!(text.contains("[phys-1] Sommeil"));
        assert!(text.contains("[spir-5]"));
    }
}
