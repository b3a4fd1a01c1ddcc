//! CLI for the GMI addon content installer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gmi_core::config;
use std::path::PathBuf;

use commands::{run_install, run_list, run_locate};

pub use commands::InstallFailed;

/// Top-level CLI for the GMI installer.
#[derive(Debug, Parser)]
#[command(name = "gmi")]
#[command(about = "GMI: download Garry's Mod content archives into the addons folder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download, extract and merge every configured archive into the addons folder.
    Install {
        /// Install into this directory instead of the one found through Steam.
        #[arg(long, value_name = "DIR")]
        addons_dir: Option<PathBuf>,
        /// Archive URL to install (repeatable). Replaces the configured list.
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,
    },

    /// Print the Garry's Mod addons folder found through Steam.
    Locate,

    /// List the configured archive URLs in install order.
    List,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Install { addons_dir, urls } => run_install(&cfg, addons_dir, urls).await?,
            CliCommand::Locate => run_locate(&cfg)?,
            CliCommand::List => run_list(&cfg),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
