//! CLI command handlers, one per file.

mod install;
mod list;
mod locate;

pub use install::{run_install, InstallFailed};
pub use list::run_list;
pub use locate::run_locate;
