//! Install worker: download -> extract -> merge, one archive at a time.
//!
//! The job runs on a single background thread and reports through an
//! unbounded channel of [`InstallEvent`]s. The first failure aborts the job;
//! archives merged before it stay in the addons directory.

mod download;
mod extract;
mod merge;
mod progress;

use crate::config::{DownloadConfig, GmiConfig};
use crate::error::InstallError;
use crate::resolver::{self, SteamConfigStore};
use std::io;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use tokio::sync::mpsc;

pub use download::download_to_file;
pub use extract::extract_zip;
pub use merge::merge_into;
pub use progress::{percent_complete, InstallEvent, InstallOutcome, InstallProgress, JobState};

/// Prefix of the per-job scratch directory under the OS temp root.
pub const WORK_DIR_PREFIX: &str = "gmod_batch_addons";

pub type EventSender = mpsc::UnboundedSender<InstallEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<InstallEvent>;

/// One run of the install workflow.
#[derive(Debug, Clone)]
pub struct InstallJob {
    /// Archives to install, in order.
    pub urls: Vec<String>,
    /// Explicit destination; `None` asks the resolver.
    pub addons_dir: Option<PathBuf>,
    pub download: DownloadConfig,
    /// Parent of the per-job scratch directory; `None` uses the OS temp root.
    pub work_root: Option<PathBuf>,
}

impl InstallJob {
    pub fn from_config(cfg: &GmiConfig) -> Self {
        Self {
            urls: cfg.archive_urls.clone(),
            addons_dir: cfg.addons_dir.clone(),
            download: cfg.download.clone(),
            work_root: None,
        }
    }
}

/// Destination for `job`: the explicit directory if it exists, else the resolver's answer.
pub fn destination(job: &InstallJob, store: &dyn SteamConfigStore) -> Option<PathBuf> {
    match &job.addons_dir {
        Some(dir) if dir.is_dir() => Some(dir.clone()),
        Some(dir) => {
            tracing::warn!("configured addons_dir {} does not exist", dir.display());
            None
        }
        None => resolver::resolve_addons_dir(store),
    }
}

fn emit(events: &EventSender, event: InstallEvent) {
    // A closed receiver only means nobody is watching.
    let _ = events.send(event);
}

fn finish(events: &EventSender, status: String, outcome: InstallOutcome) -> InstallOutcome {
    emit(events, InstallEvent::Status(status));
    emit(events, InstallEvent::Finished(outcome.clone()));
    outcome
}

/// Run `job` to completion on the current thread.
pub fn run_job(job: &InstallJob, store: &dyn SteamConfigStore, events: &EventSender) -> InstallOutcome {
    let Some(addons_dir) = destination(job, store) else {
        let message = InstallError::AddonsDirNotFound.to_string();
        return finish(events, message.clone(), InstallOutcome::Failed { message });
    };

    tracing::info!(
        archives = job.urls.len(),
        dest = %addons_dir.display(),
        "install started"
    );

    match install_all(job, &addons_dir, events) {
        Ok(installed) => {
            tracing::info!(installed, "install finished");
            finish(
                events,
                format!(
                    "All {} addons installed successfully in: {}",
                    installed,
                    addons_dir.display()
                ),
                InstallOutcome::Succeeded {
                    addons_dir,
                    installed,
                },
            )
        }
        Err(e) => {
            tracing::warn!("install failed: {}", e);
            let message = format!("Error during install: {}", e);
            finish(events, message.clone(), InstallOutcome::Failed { message })
        }
    }
}

fn install_all(job: &InstallJob, addons_dir: &Path, events: &EventSender) -> Result<usize, InstallError> {
    let total = job.urls.len();
    let mut builder = tempfile::Builder::new();
    builder.prefix(WORK_DIR_PREFIX);
    let work = match &job.work_root {
        Some(root) => builder.tempdir_in(root),
        None => builder.tempdir(),
    }
    .map_err(|e| InstallError::io("create work directory", e))?;

    for (index, url) in job.urls.iter().enumerate() {
        let n = index + 1;
        emit(
            events,
            InstallEvent::Status(format!("Downloading file {} of {}...", n, total)),
        );
        let archive = work.path().join(format!("addon_{}.zip", n));
        download_to_file(url, &archive, &job.download)?;

        emit(events, InstallEvent::Status(format!("Extracting addon {}...", n)));
        let extracted = work.path().join(format!("extracted_{}", n));
        extract_zip(&archive, &extracted)?;
        let copied = merge_into(&extracted, addons_dir)?;
        tracing::debug!(item = n, url = %url, files = copied, "archive merged");

        emit(events, InstallEvent::Progress(percent_complete(n, total)));
    }
    Ok(total)
}

/// Start `job` on a dedicated worker thread.
///
/// The returned receiver yields every event; the last one is always
/// [`InstallEvent::Finished`]. The job cannot be cancelled once started.
pub fn spawn_job<S>(job: InstallJob, store: S) -> io::Result<(JoinHandle<InstallOutcome>, EventReceiver)>
where
    S: SteamConfigStore + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = std::thread::Builder::new()
        .name("gmi-install".into())
        .spawn(move || run_job(&job, &store, &tx))?;
    Ok((handle, rx))
}
