use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Resolve a module and print the plan the execution engine would run
#[derive(Parser, Debug)]
#[command(name = "rustle-dispatch")]
#[command(about = "Parse, resolve and plan rustle module invocations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct DispatchCli {
    /// Module name, e.g. `shell` or `copy`
    pub module: String,

    /// Raw module arguments, e.g. `cmd="ls -al" chdir=/tmp`
    #[arg(default_value = "")]
    pub args: String,

    /// Dispatch configuration file (JSON or YAML)
    #[arg(short, long, default_value = "config/dispatch.json")]
    pub config: PathBuf,

    /// Extra module root, searched before the built-in roots (repeatable)
    #[arg(short = 'p', long = "search-path")]
    pub search_paths: Vec<PathBuf>,

    /// Only search the roots given with --search-path
    #[arg(long)]
    pub no_default_paths: bool,

    /// Target platform (defaults to the local platform)
    #[arg(long)]
    pub platform: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
