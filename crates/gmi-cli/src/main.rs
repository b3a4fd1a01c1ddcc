use gmi_core::logging;

mod cli;

use crate::cli::{CliCommand, InstallFailed};

/// Line to print for a failed command, or `None` when the failure was already shown.
fn error_line(err: &anyhow::Error) -> Option<String> {
    if err.downcast_ref::<InstallFailed>().is_some() {
        return None;
    }
    Some(format!("gmi error: {:#}", err))
}

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        if let Some(line) = error_line(&err) {
            eprintln!("{}", line);
        }
        std::process::exit(1);
    }
}
