use crate::demo::{run_demo, DemoArgs};
use crate::infra::{parse_ordering, ConfiguredNotifier, ConfiguredOrdering};
use crate::render::{render_catalog, render_results};
use crate::server;
use crate::terminal::Terminal;
use clap::{Args, Parser, Subcommand};
use life_batteries::config::AppConfig;
use life_batteries::error::AppError;
use life_batteries::telemetry;
use life_batteries::workflows::answer_sheet::AnswerSheetImporter;
use life_batteries::workflows::assessment::{
    AssessmentSession, OrderingMode, QuestionCatalog, Scorer, ScoringConfig,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Life Batteries",
    about = "Run the seven life batteries self-assessment from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the question catalog
    Catalog,
    /// Score an answer sheet (CSV with question_id,points columns)
    Score(ScoreArgs),
    /// Take the questionnaire interactively in the terminal
    Run(RunArgs),
    /// Replay a scripted session and print its results
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer sheet to score
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Name shown on the results
    #[arg(long, default_value = "Participant")]
    pub(crate) name: String,
    /// Print the results as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    /// Question ordering (canonical, battery_blocks, shuffled); defaults to ASSESSMENT_ORDERING
    #[arg(long, value_parser = parse_ordering)]
    pub(crate) ordering: Option<OrderingMode>,
    /// Seed for a reproducible question order
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog => {
            let catalog = QuestionCatalog::standard();
            render_catalog(&mut std::io::stdout().lock(), &catalog)?;
            Ok(())
        }
        Command::Score(args) => run_score(args),
        Command::Run(args) => run_interactive(args).await,
        Command::Demo(args) => run_demo(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let scorer = Scorer::standard();
    let answers = AnswerSheetImporter::from_path(&args.answers, scorer.catalog())?;
    let results = scorer.score(args.name.trim(), &answers);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let payload = serde_json::json!({
            "results": &results,
            "summary": results.summary(),
            "report_sections": results.report_sections(),
        });
        serde_json::to_writer_pretty(&mut out, &payload)?;
        writeln!(out)?;
    } else {
        render_results(&mut out, &results)?;
    }
    Ok(())
}

async fn run_interactive(args: RunArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mode = args.ordering.unwrap_or(config.assessment.ordering);
    let notifier = ConfiguredNotifier::from_config(&config.assessment)?;
    let catalog = Arc::new(QuestionCatalog::standard());
    let mut session = AssessmentSession::new(
        catalog,
        Arc::new(ConfiguredOrdering::new(mode, args.seed)),
        Arc::new(notifier.clone()),
        ScoringConfig::default(),
    );
    info!(%mode, seed = ?args.seed, "interactive assessment starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = Terminal::new(stdin.lock(), stdout.lock()).run(&mut session);

    notifier.drain().await;
    outcome.map(|_| ())
}
