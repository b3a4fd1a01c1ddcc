//! `gmi install` – run the install job and render its events.

use anyhow::{Context, Result};
use gmi_core::config::GmiConfig;
use gmi_core::installer::{self, InstallEvent, InstallJob, InstallOutcome, InstallProgress};
use gmi_core::resolver::SystemStore;
use std::path::PathBuf;

/// Returned when the job ends in failure. The worker's status line already
/// told the user why, so `main` exits without printing it again.
#[derive(Debug)]
pub struct InstallFailed;

impl std::fmt::Display for InstallFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "install failed")
    }
}

impl std::error::Error for InstallFailed {}

pub async fn run_install(
    cfg: &GmiConfig,
    addons_dir: Option<PathBuf>,
    urls: Vec<String>,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if addons_dir.is_some() {
        cfg.addons_dir = addons_dir;
    }
    if !urls.is_empty() {
        cfg.archive_urls = urls;
        cfg.validate()?;
    }
    let job = InstallJob::from_config(&cfg);

    let (handle, mut events) =
        installer::spawn_job(job, SystemStore).context("start install worker")?;

    let mut progress = InstallProgress::default();
    while let Some(event) = events.recv().await {
        progress.apply(&event);
        match &event {
            InstallEvent::Status(s) => println!("{}", s),
            InstallEvent::Progress(p) => println!("  [{:>3}%]", p),
            InstallEvent::Finished(_) => {}
        }
    }
    tracing::debug!(percent = progress.percent, finished = progress.is_finished(), "worker events drained");

    let outcome = tokio::task::spawn_blocking(move || handle.join())
        .await?
        .map_err(|_| anyhow::anyhow!("install worker panicked"))?;

    match outcome {
        InstallOutcome::Succeeded { installed, .. } => {
            tracing::info!("install completed {} archive(s)", installed);
            Ok(())
        }
        InstallOutcome::Failed { message } => {
            tracing::warn!("{}", message);
            Err(InstallFailed.into())
        }
    }
}
