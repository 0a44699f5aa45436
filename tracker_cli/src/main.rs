use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Step and calorie tracker for wearable activity records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the profile from this config file instead of the default path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override profile weight (kg)
    #[arg(long, global = true)]
    weight: Option<f64>,

    /// Override profile height (m)
    #[arg(long, global = true)]
    height: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise training entries ("<steps>,<activity>,<duration>")
    Training {
        /// Records to process; read one per line from stdin when omitted
        records: Vec<String>,

        /// Print one JSON object per record
        #[arg(long)]
        json: bool,

        /// Reject records whose calorie calculation fails instead of printing nothing
        #[arg(long)]
        strict: bool,
    },

    /// Summarise daily step packages ("<steps>,<duration>")
    Day {
        /// Packages to process; read one per line from stdin when omitted
        records: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracker_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let weight = cli.weight.unwrap_or(config.profile.weight_kg);
    let height = cli.height.unwrap_or(config.profile.height_m);

    match cli.command {
        Commands::Training {
            records,
            json,
            strict,
        } => cmd_training(collect_records(records)?, weight, height, json, strict),
        Commands::Day { records } => cmd_day(collect_records(records)?, weight, height),
    }
}

fn cmd_training(
    records: Vec<String>,
    weight: f64,
    height: f64,
    json: bool,
    strict: bool,
) -> Result<()> {
    let mut rejected = 0;

    for record in &records {
        let outcome = if json || strict {
            training_report(record, weight, height).and_then(|report| render(&report, json))
        } else {
            training_info(record, weight, height)
        };

        match outcome {
            Ok(text) => print!("{}", text),
            Err(err) => {
                eprintln!("{}: {}", record, err);
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        return Err(Error::Other(format!(
            "{} of {} records rejected",
            rejected,
            records.len()
        )));
    }
    Ok(())
}

fn render(report: &TrainingReport, json: bool) -> Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string(report)?))
    } else {
        Ok(report.to_string())
    }
}

fn cmd_day(records: Vec<String>, weight: f64, height: f64) -> Result<()> {
    for record in &records {
        print!("{}", day_action_info(record, weight, height));
    }
    tracing::debug!("Processed {} daily packages", records.len());
    Ok(())
}

/// Records from the command line, or non-blank stdin lines when none given
fn collect_records(records: Vec<String>) -> Result<Vec<String>> {
    if !records.is_empty() {
        return Ok(records);
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
