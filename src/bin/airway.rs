// Command-line entry point
//
// Usage:
//   airway score --age 60 --mallampati 2 [--format json]
//   airway plan 45
//   airway batch assessments.csv results.csv

use airway_scorer_rust::assessment::*;
use airway_scorer_rust::batch::{load_assessments, score_batch, write_results};
use airway_scorer_rust::{
    ExplanationGenerator, JsonFormatter, MarkdownFormatter, RecommendationMapper, RiskEngine,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "airway")]
#[command(about = "Difficult intubation risk scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single assessment
    Score {
        #[command(flatten)]
        assessment: AssessmentArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
    /// Show the preparation plan for a score
    Plan {
        /// Risk score (0-100)
        #[arg(value_parser = clap::value_parser!(u32).range(0..=100))]
        score: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
    /// Score every row of a CSV file
    Batch {
        /// Input CSV of assessments
        input: PathBuf,
        /// Output CSV of results
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

/// Assessment findings; omitted flags are unset
#[derive(Args)]
struct AssessmentArgs {
    /// Age in years
    #[arg(long, default_value_t = 0)]
    age: i32,
    #[arg(long, default_value = "")]
    gender: Gender,
    /// Weight in kg
    #[arg(long, default_value_t = 0.0)]
    weight: f64,
    /// Height in cm
    #[arg(long, default_value_t = 0.0)]
    height: f64,
    /// Mallampati class: 1-4
    #[arg(long, default_value = "")]
    mallampati: MallampatiClass,
    /// Thyromental distance in cm
    #[arg(long, default_value_t = 0.0)]
    tmd: f64,
    /// Inter-incisor gap in cm
    #[arg(long, default_value_t = 0.0)]
    inter_incisor_gap: f64,
    /// normal, reduced, severely-reduced
    #[arg(long, default_value = "")]
    neck_mobility: NeckMobility,
    /// grade-a, grade-b, grade-c
    #[arg(long, default_value = "")]
    jaw_protrusion: JawProtrusion,
    /// Upper lip bite test class: 1-3
    #[arg(long, default_value = "")]
    ulbt: UlbtClass,
    /// none, suspected, diagnosed
    #[arg(long, default_value = "")]
    osa: OsaStatus,
    /// none, mild, moderate, severe
    #[arg(long, default_value = "")]
    arthritis: ArthritisSeverity,
    /// none, yes
    #[arg(long, default_value = "")]
    radiation_history: RadiationHistory,
    /// none, difficult-laryngoscopy, difficult-ventilation, both
    #[arg(long, default_value = "")]
    previous_difficulty: PreviousDifficulty,
}

impl From<AssessmentArgs> for PatientAssessment {
    fn from(args: AssessmentArgs) -> Self {
        PatientAssessment {
            age: args.age,
            gender: args.gender,
            weight: args.weight,
            height: args.height,
            mallampati: args.mallampati,
            tmd: args.tmd,
            inter_incisor_gap: args.inter_incisor_gap,
            neck_mobility: args.neck_mobility,
            jaw_protrusion: args.jaw_protrusion,
            ulbt: args.ulbt,
            osa: args.osa,
            arthritis: args.arthritis,
            radiation_history: args.radiation_history,
            previous_difficulty: args.previous_difficulty,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for reports
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airway_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { assessment, format } => {
            let assessment = PatientAssessment::from(assessment);
            let result = RiskEngine::compute(&assessment);
            let explanation = ExplanationGenerator::generate(&result);
            match format {
                OutputFormat::Markdown => print!("{}", MarkdownFormatter::format(&explanation)),
                OutputFormat::Json => println!("{}", JsonFormatter::format(&explanation)?),
            }
        }
        Commands::Plan { score, format } => {
            let plan = RecommendationMapper::map_plan(score);
            match format {
                OutputFormat::Markdown => {
                    println!("{} ({} risk)\n", plan.approach, plan.tier);
                    for (heading, items) in [
                        ("Equipment", &plan.equipment),
                        ("Personnel", &plan.personnel),
                        ("Backup", &plan.backup),
                    ] {
                        println!("{}:", heading);
                        for item in items {
                            println!("  - {}", item);
                        }
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            }
        }
        Commands::Batch { input, output } => {
            let inputs = load_assessments(&input)?;
            let rows = score_batch(&inputs);
            write_results(&output, &rows)?;
        }
    }

    Ok(())
}
