mod args;
mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::{render_keyspace, run};
pub use config::{Config, Settings};
