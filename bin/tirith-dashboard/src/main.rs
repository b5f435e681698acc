// SPDX-License-Identifier: AGPL-3.0-only
// Minimal bootstrap; pipeline and render logic reside in the tirith crate.
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tirith::{FilterSelection, InterestDashboard, Question, SheetSource};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

mod config;
mod http;
mod view;

use config::DashboardConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "tirith-dashboard", about = "Live survey-response dashboard")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Serve the dashboard over HTTP (default)
    Serve,
    /// Fetch once and print the report render tree as JSON
    Snapshot {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Re-run the refresh cycle on the configured interval
    Watch {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print the full render tree each cycle instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Accept only these Class Status values (repeatable)
    #[arg(long = "class", value_name = "VALUE")]
    class: Vec<String>,
    /// Accept only these Executive-Board interest values (repeatable)
    #[arg(long = "board", value_name = "VALUE")]
    board: Vec<String>,
}

impl FilterArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection::new()
            .with_accepted(Question::ClassStatus, self.class.iter().cloned())
            .with_accepted(Question::ExecutiveInterest, self.board.iter().cloned())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cli = Cli::parse();
    let config = DashboardConfig::from_env();
    match cli.cmd.unwrap_or(Command::Serve) {
        Command::Serve => http::run_server(config).await,
        Command::Snapshot { filters } => run_snapshot(config, filters.selection()).await,
        Command::Watch { filters, json } => run_watch(config, filters.selection(), json).await,
    }
}

async fn run_snapshot(config: DashboardConfig, selection: FilterSelection) -> Result<()> {
    let dashboard = InterestDashboard::with_source(SheetSource::new(config.sheet_url));
    let report = dashboard.refresh(&selection).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn run_watch(config: DashboardConfig, selection: FilterSelection, json: bool) -> Result<()> {
    let dashboard = InterestDashboard::with_source(SheetSource::new(config.sheet_url));
    let mut ticker = tokio::time::interval(config.refresh);
    // a slow fetch must not cause a burst of catch-up cycles
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval_secs = config.refresh.as_secs(), "watch started");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match dashboard.refresh(&selection).await {
                    Ok(report) => {
                        if json {
                            println!("{}", report.to_json()?);
                        } else {
                            info!(
                                matching = report.matching_rows,
                                total = report.snapshot.row_count,
                                sections = report.sections.len(),
                                "dashboard refreshed"
                            );
                        }
                    }
                    Err(e) => warn!(error = %e, "refresh cycle aborted"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    info!("watch stopped");
    Ok(())
}
