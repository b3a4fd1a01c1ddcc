pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod resolver;
