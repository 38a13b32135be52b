//! Connectivity check entry point
//!
//! Verifies both service configurations with one minimal call each: a
//! single-note source page and a single-row destination search. Each check
//! reports pass/fail independently; the process exits non-zero if either
//! check fails.

use std::process::ExitCode;

use notebridge_cli::AppContext;
use notebridge_domain::constants::DEFAULT_NOTES_SORT;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    notebridge_cli::init_logging();
    info!("checking service connectivity");

    let ctx = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(err) => {
            error!(error = %err, "configuration incomplete");
            return ExitCode::FAILURE;
        }
    };

    let mut all_passed = true;

    match ctx.source().list_page(1, "", DEFAULT_NOTES_SORT).await {
        Ok(page) => info!(total_notes = page.total_count, "source check passed"),
        Err(err) => {
            error!(error = %err, "source check failed");
            all_passed = false;
        }
    }

    match ctx.store().probe().await {
        Ok(total) => info!(total_records = total, "destination check passed"),
        Err(err) => {
            error!(error = %err, "destination check failed");
            all_passed = false;
        }
    }

    if all_passed {
        info!("all checks passed");
        ExitCode::SUCCESS
    } else {
        error!("one or more checks failed");
        ExitCode::FAILURE
    }
}
