use crate::infra::ConfiguredOrdering;
use crate::render::render_results;
use clap::{Args, ValueEnum};
use life_batteries::error::AppError;
use life_batteries::workflows::assessment::{
    AssessmentResults, AssessmentSession, LogNotifier, OrderingMode, Participant,
    Question, QuestionCatalog, ScoringConfig, SessionStep,
};
use std::io::Write;
use std::sync::Arc;

/// Canned answering behaviour for the demo walk-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoPattern {
    /// Best option everywhere.
    Healthiest,
    /// Worst option everywhere.
    Worst,
    /// A different level per battery.
    #[default]
    Mixed,
}

impl DemoPattern {
    fn points_for(self, question: &Question) -> u8 {
        let best = question
            .options
            .iter()
            .map(|option| option.points)
            .max()
            .unwrap_or_default();
        let worst = question
            .options
            .iter()
            .map(|option| option.points)
            .min()
            .unwrap_or_default();

        match self {
            DemoPattern::Healthiest => best,
            DemoPattern::Worst => worst,
            DemoPattern::Mixed => {
                let mut points: Vec<u8> = question.options.iter().map(|o| o.points).collect();
                points.sort_unstable_by(|a, b| b.cmp(a));
                let index = (question.battery.ordinal() - 1) % points.len().max(1);
                points.get(index).copied().unwrap_or(worst)
            }
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answer pattern to replay
    #[arg(long, value_enum, default_value_t = DemoPattern::Mixed)]
    pub(crate) pattern: DemoPattern,
    /// Seed for a reproducible question order
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the results as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let results = play(args.pattern, args.seed)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Démonstration : profil {:?}", args.pattern)?;
        render_results(&mut out, &results)?;
    }
    Ok(())
}

/// Replay a full session with scripted answers and return its results.
pub(crate) fn play(pattern: DemoPattern, seed: Option<u64>) -> Result<AssessmentResults, AppError> {
    let catalog = Arc::new(QuestionCatalog::standard());
    let mut session = AssessmentSession::new(
        catalog,
        Arc::new(ConfiguredOrdering::new(OrderingMode::BatteryBlocks, seed)),
        Arc::new(LogNotifier),
        ScoringConfig::default(),
    );

    let mut step = session.begin(Participant {
        first_name: "Alex".to_string(),
        last_name: "Démo".to_string(),
        email: "alex.demo@example.com".to_string(),
        phone: None,
    })?;

    loop {
        step = match step {
            SessionStep::Question(view) => {
                session.select(pattern.points_for(&view.question))?;
                session.next()?
            }
            SessionStep::Checkpoint(_) => session.next()?,
            SessionStep::Results(results) => return Ok(results),
            SessionStep::Intro => session.next()?,
        };
    }
}
