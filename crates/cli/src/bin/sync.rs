//! Full sync entry point
//!
//! Mirrors every new source note into the destination table, then exits.
//! Intended to run on an external schedule (e.g. CI cron). Exits non-zero on
//! any fatal error; per-chunk write failures are logged and reflected in the
//! summary but do not fail the run.

use std::process::ExitCode;

use anyhow::Context;
use notebridge_cli::AppContext;
use notebridge_core::SyncReport;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    notebridge_cli::init_logging();
    info!("starting notes sync");

    match run().await {
        Ok(report) => {
            info!(
                total = report.total,
                already_imported = report.already_imported,
                pending = report.pending,
                imported = report.imported,
                failed_chunks = report.failed_chunks,
                "sync completed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let detail = format!("{err:#}");
            error!(error = %detail, "sync failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<SyncReport> {
    let ctx = AppContext::from_env().context("failed to load configuration")?;
    let report = ctx.sync_service().run().await?;
    Ok(report)
}
