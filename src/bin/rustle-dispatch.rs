use anyhow::{Context, Result};
use clap::Parser;
use rustle_dispatch::cli::{format_plan_json, format_plan_text, DispatchCli, OutputFormat};
use rustle_dispatch::config::{load_from_path, ConfigStore};
use rustle_dispatch::logging::{init_logging, LoggingOptions};
use rustle_dispatch::modules::SearchPath;
use rustle_dispatch::types::Platform;
use rustle_dispatch::ModuleDispatcher;
use tracing::{debug, error, info};

fn main() -> Result<()> {
    let cli = DispatchCli::parse();

    let config = load_from_path(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;

    let _log_guard = init_logging(&LoggingOptions::from_config(&config, cli.verbose))?;

    info!("Starting rustle-dispatch v{}", env!("CARGO_PKG_VERSION"));

    let search_path = build_search_path(&cli);
    debug!(roots = ?search_path.roots(), "module search path");

    let platform = cli
        .platform
        .as_deref()
        .map(Platform::from_identifier)
        .unwrap_or_else(Platform::current);

    let dispatcher = ModuleDispatcher::new(search_path, ConfigStore::with_config(config)?);

    let plan = match dispatcher.dispatch(&cli.module, &cli.args, &platform) {
        Ok(plan) => plan,
        Err(e) => {
            error!(module = %cli.module, "dispatch failed: {e}");
            return Err(e.into());
        }
    };

    match cli.format {
        OutputFormat::Text => print!("{}", format_plan_text(&plan)),
        OutputFormat::Json => println!("{}", format_plan_json(&plan)?),
    }

    Ok(())
}

/// User roots go ahead of the built-in ones, in the order given.
fn build_search_path(cli: &DispatchCli) -> SearchPath {
    let mut search_path = if cli.no_default_paths {
        SearchPath::default()
    } else {
        SearchPath::with_defaults()
    };

    for root in cli.search_paths.iter().rev() {
        search_path.prepend(root.clone());
    }

    search_path
}
