use crate::types::{ColorMode, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keytree")]
#[command(about = "Browse a Redis keyspace as a tree", long_about = None)]
#[command(version)]
#[command(after_help = "Example:\n  keytree -u redis://localhost:6380 'tasks:*' 'metrics:*'")]
pub struct Cli {
    /// Store address, e.g. redis://[user:pass@]host[:port][/db]
    #[arg(short, long, env = "KEYTREE_URL")]
    pub url: Option<String>,

    /// Key segment separator [default: ":"]
    #[arg(short, long, allow_hyphen_values = true)]
    pub sep: Option<String>,

    /// Show keys, types and TTLs without fetching values
    #[arg(short = 'k', long)]
    pub only_keys: bool,

    /// Print composite values on a single line
    #[arg(short = 'n', long, overrides_with = "wrap")]
    pub nowrap: bool,

    /// Spread multi-element values over several lines (the default)
    #[arg(long, overrides_with = "nowrap")]
    pub wrap: bool,

    /// Draw branches with ASCII characters
    #[arg(long)]
    pub ascii: bool,

    /// When to color output [default: auto]
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Config file [default: $KEYTREE_CONFIG, then <config_dir>/keytree/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Key patterns in store glob syntax
    #[arg(value_name = "PATTERN", default_values_t = [String::from("*")])]
    pub patterns: Vec<String>,
}
