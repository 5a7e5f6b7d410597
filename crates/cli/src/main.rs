use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitals_core::{
    analyze, analyze_parallel, classify, AssessmentPayload, BatchSummary, Classification,
    JsonFileSource, PatientRecord, PatientSource, TriageError, TriageResult,
};

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Vital-sign risk triage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a JSON file of patient records and print the assessment payload
    Analyze {
        /// Path to a JSON array of records, a `{ "data": [...] }` page, or an array of pages
        file: PathBuf,
        /// Classify records on the rayon pool
        #[arg(long)]
        parallel: bool,
        /// Also print the summary and every per-patient classification
        #[arg(long)]
        details: bool,
    },
    /// Classify a single record given on the command line
    Classify {
        /// Patient identifier
        #[arg(long)]
        id: String,
        /// Blood pressure as "<systolic>/<diastolic>"
        #[arg(long)]
        blood_pressure: Option<String>,
        /// Temperature reading
        #[arg(long)]
        temperature: Option<f64>,
        /// Age in years
        #[arg(long)]
        age: Option<f64>,
    },
}

#[derive(Serialize)]
struct DetailedReport<'a> {
    payload: AssessmentPayload,
    summary: BatchSummary,
    classifications: &'a [Classification],
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> TriageResult<String> {
    serde_json::to_string_pretty(value).map_err(TriageError::Serialization)
}

/// Reads a patient feed and renders its assessment payload, or the full report with
/// `details`.
fn run_analyze(file: PathBuf, parallel: bool, details: bool) -> TriageResult<String> {
    let records = JsonFileSource::new(file).fetch_all()?;
    let analysis = if parallel {
        analyze_parallel(&records)
    } else {
        analyze(&records)
    };

    if details {
        to_pretty_json(&DetailedReport {
            payload: analysis.payload(),
            summary: analysis.summary(),
            classifications: &analysis.classifications,
        })
    } else {
        to_pretty_json(&analysis.payload())
    }
}

fn run_classify(
    id: String,
    blood_pressure: Option<String>,
    temperature: Option<f64>,
    age: Option<f64>,
) -> TriageResult<String> {
    let record = PatientRecord::new(id)
        .with_blood_pressure(blood_pressure)
        .with_temperature(temperature)
        .with_age(age);
    to_pretty_json(&classify(&record))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitals_core=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            file,
            parallel,
            details,
        }) => {
            println!("{}", run_analyze(file, parallel, details)?);
        }
        Some(Commands::Classify {
            id,
            blood_pressure,
            temperature,
            age,
        }) => {
            println!("{}", run_classify(id, blood_pressure, temperature, age)?);
        }
        None => {
            println!("Use 'vitals --help' for commands");
        }
    }

    Ok(())
}
