use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scout_core::Domain;
use scout_research::RunOptions;

/// How the run summary is printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Top-level CLI parser for the `scout` binary.
#[derive(Debug, Parser)]
#[command(
    name = "scout",
    version,
    about = "Crawl OCA code, r/odoo and Stack Overflow into dated citation notes"
)]
pub struct Cli {
    /// Skip Stack Overflow (rate limited) and print a sample citation
    #[arg(long)]
    pub test_mode: bool,

    /// Research domain: module_dev, docker, studio, odoo_sh
    #[arg(short, long, default_value = "module_dev")]
    pub domain: Domain,

    /// Maximum results kept per query, at least 1 (defaults to general.max_results)
    #[arg(short = 'n', long)]
    pub max_results: Option<NonZeroUsize>,

    /// Directory for daily notes (defaults to general.notes_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML playbook replacing the built-in query sets
    #[arg(long)]
    pub playbook: Option<PathBuf>,

    /// Config file read in place of .scout/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Summary format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run options, falling back to `default_max_results` from config.
    #[must_use]
    pub fn run_options(&self, default_max_results: usize) -> RunOptions {
        RunOptions {
            domain: self.domain,
            max_results: self.max_results.map_or(default_max_results, NonZeroUsize::get),
            test_mode: self.test_mode,
        }
    }
}
