//! `gmi list` – show the configured archives.

use gmi_core::config::GmiConfig;

pub fn run_list(cfg: &GmiConfig) {
    if cfg.archive_urls.is_empty() {
        println!("No archives configured.");
        return;
    }
    println!("{:<4} {}", "#", "URL");
    for (i, url) in cfg.archive_urls.iter().enumerate() {
        println!("{:<4} {}", i + 1, url);
    }
}
