//! Winsearch CLI
//!
//! Drives the window search provider against a desktop snapshot file. Useful
//! for checking how a query ranks windows and what an activation would do
//! before wiring the provider into a shell.

mod snapshot;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use snapshot::{HostAction, Snapshot, SnapshotHost};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use winsearch_core::config::{Config, Directories};
use winsearch_core::{
    ActivationModifiers, DispatchOutcome, ResultMeta, WindowId, WindowSearchProvider,
};

/// Search open windows from the command line
#[derive(Parser, Debug)]
#[command(name = "winsearch")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Examples:
  winsearch -s desktop.json query fire fox
  winsearch -s desktop.json query wq term /m2
  winsearch -s desktop.json activate --id 0-11 firefox
  winsearch -s desktop.json activate --id 0-11 --shift firefox
  winsearch config --init
")]
struct Cli {
    /// Desktop snapshot (JSON) standing in for the window manager
    #[arg(short, long, global = true, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Config file (defaults to `~/.config/winsearch/config.json`)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank windows for a query and print the results
    Query {
        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Query terms, as typed into the overview
        terms: Vec<String>,
    },

    /// Run a query, then activate one of its results
    Activate {
        /// Result id printed by `query`
        #[arg(long)]
        id: String,

        /// Hold Shift while activating
        #[arg(long)]
        shift: bool,

        /// Hold Ctrl while activating
        #[arg(long)]
        ctrl: bool,

        terms: Vec<String>,
    },

    /// Show provider registration details
    Info,

    /// Show the config file, or write the defaults with `--init`
    Config {
        #[arg(long)]
        init: bool,
    },
}

/// Output of `activate`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivationReport {
    outcome: DispatchOutcome,
    actions: Vec<HostAction>,
}

/// Logs go to stderr so stdout stays parseable.
fn setup_logging() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("winsearch={default_level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    match cli.command {
        Commands::Query { json, terms } => {
            run_query(&config_path, cli.snapshot.as_deref(), &terms, json)
        }
        Commands::Activate {
            id,
            shift,
            ctrl,
            terms,
        } => run_activate(
            &config_path,
            cli.snapshot.as_deref(),
            &WindowId::from(id),
            &terms,
            ActivationModifiers { shift, ctrl },
        ),
        Commands::Info => run_info(),
        Commands::Config { init } => run_config(&config_path, init),
    }
}

fn default_config_path() -> Result<PathBuf> {
    Directories::new()
        .map(|dirs| dirs.config_file)
        .context("Could not determine config directory (no home directory)")
}

fn load_provider(
    config_path: &Path,
    snapshot: Option<&Path>,
) -> Result<Option<WindowSearchProvider<SnapshotHost>>> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    if !config.window_search.enabled {
        warn!("Window search is disabled in {}", config_path.display());
        return Ok(None);
    }

    let snapshot = snapshot.context("A desktop snapshot is required (--snapshot PATH)")?;
    let snapshot = Snapshot::load(snapshot)?;
    debug!(
        "Loaded snapshot: {} windows, {} workspaces",
        snapshot.windows.len(),
        snapshot.workspace_count
    );

    Ok(Some(WindowSearchProvider::new(
        SnapshotHost::new(snapshot),
        config.window_search,
    )))
}

fn run_query(config_path: &Path, snapshot: Option<&Path>, terms: &[String], json: bool) -> Result<()> {
    let Some(mut provider) = load_provider(config_path, snapshot)? else {
        return Ok(());
    };

    let ids = provider.initial_result_set(terms, None);
    let metas = provider.result_metas(&ids);
    info!("{} results for {:?}", metas.len(), terms);

    if json {
        println!("{}", serde_json::to_string_pretty(&metas)?);
    } else {
        print_metas(&metas);
    }
    Ok(())
}

fn print_metas(metas: &[ResultMeta]) {
    if metas.is_empty() {
        println!("No matching windows");
        return;
    }

    let id_width = metas.iter().map(|m| m.id.as_str().len()).max().unwrap_or(0);
    for meta in metas {
        println!(
            "{:<id_width$}  {}  ({}, {})",
            meta.id.as_str(),
            meta.name,
            meta.description,
            meta.icon.icon_name()
        );
    }
}

fn run_activate(
    config_path: &Path,
    snapshot: Option<&Path>,
    id: &WindowId,
    terms: &[String],
    modifiers: ActivationModifiers,
) -> Result<()> {
    let Some(mut provider) = load_provider(config_path, snapshot)? else {
        return Ok(());
    };

    provider.initial_result_set(terms, None);
    let outcome = provider.activate_result(id, terms, modifiers);
    if outcome == DispatchOutcome::UnknownResult {
        warn!("No result with id {} for {:?}", id, terms);
    }

    let report = ActivationReport {
        outcome,
        actions: provider.host().actions(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_info() -> Result<()> {
    let info = winsearch_core::ProviderInfo::default();
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn run_config(config_path: &Path, init: bool) -> Result<()> {
    if init {
        if config_path.exists() {
            println!("Config already exists: {}", config_path.display());
            return Ok(());
        }
        if let Some(parent) = config_path.parent() {
            Directories::with_base(parent.to_path_buf())
                .ensure_exists()
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        Config::default().save(config_path)?;
        println!("Wrote default config: {}", config_path.display());
        return Ok(());
    }

    let config = Config::load(config_path)?;
    println!("# {}", config_path.display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
