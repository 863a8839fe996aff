use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_timetable::export::{self, format_instant, format_time};
use u_timetable::kpi::TimetableKpi;
use u_timetable::models::Window;
use u_timetable::packer::SelectionPolicy;
use u_timetable::validation::validate_request;
use u_timetable::{plan, AllocationConfig, AllocationRequest, TimetableGenerator};

#[derive(Parser)]
#[command(name = "u-timetable")]
#[command(about = "Allocate a weekly study timetable from units and availability")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a timetable from a JSON request file
    Generate {
        /// Request file with units, windows/blocks and optional config
        input: PathBuf,
        /// Unit selection policy (greedy or randomized)
        #[arg(short, long)]
        policy: Option<SelectionPolicy>,
        /// Seed for the randomized policy
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the allocation as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Any date in the week to compute reminders for (YYYY-MM-DD)
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },
    /// Print the planned hour budget without packing
    Plan {
        /// Request file with units and windows/blocks
        input: PathBuf,
    },
}

/// Request file layout: the allocation request plus an optional config.
#[derive(Deserialize)]
struct RequestFile {
    #[serde(flatten)]
    request: AllocationRequest,
    #[serde(default)]
    config: AllocationConfig,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "u_timetable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        tracing::error!("{:#}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            input,
            policy,
            seed,
            json,
            week_start,
        } => {
            let RequestFile {
                request,
                mut config,
            } = load_request(&input)?;
            if let Some(policy) = policy {
                config.policy = policy;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            let windows = check_request(&request)?;
            let offset = config.reminder_offset();
            let allocation = TimetableGenerator::with_config(config)
                .allocate(&request.units, &windows)
                .context("failed to generate timetable")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&allocation)?);
                return Ok(());
            }

            print!("{}", export::render_text(&allocation.timetable));

            let kpi = TimetableKpi::calculate(&allocation.budget, &allocation.timetable, &windows);
            println!();
            println!(
                "Scheduled {} of {} budgeted hours ({} available, {:.0}% used)",
                kpi.scheduled_hours,
                kpi.budgeted_hours,
                kpi.available_hours,
                kpi.utilization * 100.0
            );
            if !kpi.starved_units.is_empty() {
                println!("Not scheduled: {}", kpi.starved_units.join(", "));
            }

            if let Some(week_start) = week_start {
                println!();
                println!("Reminders");
                for reminder in export::reminders(&allocation.timetable, week_start, offset) {
                    println!(
                        "  {} {} at {}",
                        format_instant(reminder.remind_at),
                        reminder.unit,
                        format_time(reminder.session_start.time())
                    );
                }
            }
            Ok(())
        }
        Commands::Plan { input } => {
            let RequestFile { request, .. } = load_request(&input)?;
            let windows = check_request(&request)?;
            let budget = plan(&request.units, &windows)?;
            for (unit, hours) in budget.iter() {
                println!("{unit}: {hours}h");
            }
            Ok(())
        }
    }
}

fn load_request(path: &Path) -> anyhow::Result<RequestFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Resolves the request's windows and runs strict validation on them.
fn check_request(request: &AllocationRequest) -> anyhow::Result<Vec<Window>> {
    let windows = request.resolved_windows()?;
    if let Err(errors) = validate_request(&request.units, &windows) {
        for e in &errors {
            eprintln!("  - {e}");
        }
        bail!("request has {} problem(s)", errors.len());
    }
    Ok(windows)
}
