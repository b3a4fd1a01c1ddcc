//! Events sent from the install worker to the front end, and the
//! last-value view a front end keeps of them.

use std::path::PathBuf;

/// How a job ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every archive was merged into `addons_dir`.
    Succeeded { addons_dir: PathBuf, installed: usize },
    /// The job stopped; `message` is the user-facing status.
    Failed { message: String },
}

/// One-way notification from the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    Status(String),
    /// Percentage of items completed, 0-100.
    Progress(u8),
    Finished(InstallOutcome),
}

/// Lifecycle of one job. There is no way back from `Finished`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JobState {
    #[default]
    NotStarted,
    Running,
    Finished(InstallOutcome),
}

/// Latest percentage and status line; each event overwrites the previous value.
#[derive(Debug, Clone, Default)]
pub struct InstallProgress {
    pub percent: u8,
    pub status: String,
    pub state: JobState,
}

impl InstallProgress {
    pub fn apply(&mut self, event: &InstallEvent) {
        match event {
            InstallEvent::Status(s) => {
                if self.state == JobState::NotStarted {
                    self.state = JobState::Running;
                }
                self.status = s.clone();
            }
            InstallEvent::Progress(p) => {
                self.state = JobState::Running;
                self.percent = *p;
            }
            InstallEvent::Finished(outcome) => {
                self.state = JobState::Finished(outcome.clone());
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, JobState::Finished(_))
    }
}

/// Percentage after `done` of `total` items (truncating).
///
/// The worker never asks for `total == 0` (an empty job emits no progress);
/// front ends rendering an empty job get 100 rather than a division by zero.
pub fn percent_complete(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((done.min(total) * 100) / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_truncates() {
        assert_eq!(percent_complete(1, 3), 33);
        assert_eq!(percent_complete(2, 3), 66);
        assert_eq!(percent_complete(3, 3), 100);
        assert_eq!(percent_complete(1, 8), 12);
        assert_eq!(percent_complete(0, 0), 100);
    }

    #[test]
    fn progress_overwrites_last_value() {
        let mut p = InstallProgress::default();
        assert_eq!(p.state, JobState::NotStarted);

        p.apply(&InstallEvent::Status("Downloading file 1 of 2...".into()));
        assert_eq!(p.state, JobState::Running);
        p.apply(&InstallEvent::Progress(50));
        p.apply(&InstallEvent::Status("Downloading file 2 of 2...".into()));
        assert_eq!(p.percent, 50);
        assert_eq!(p.status, "Downloading file 2 of 2...");
        assert!(!p.is_finished());

        p.apply(&InstallEvent::Finished(InstallOutcome::Failed {
            message: "boom".into(),
        }));
        assert!(p.is_finished());
    }
}
