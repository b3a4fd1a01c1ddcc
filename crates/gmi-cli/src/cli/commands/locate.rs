//! `gmi locate` – print the addons directory the installer would use.

use anyhow::{bail, Result};
use gmi_core::config::GmiConfig;
use gmi_core::installer::{self, InstallJob};
use gmi_core::resolver::SystemStore;

pub fn run_locate(cfg: &GmiConfig) -> Result<()> {
    let job = InstallJob::from_config(cfg);
    match installer::destination(&job, &SystemStore) {
        Some(dir) => {
            println!("{}", dir.display());
            Ok(())
        }
        None => bail!("Garry's Mod addons folder not found."),
    }
}
