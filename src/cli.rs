//! Command-line surface shared by the `materx-explorer` binary and its tests.
//!
//! Parsing lives in [`Cli`]; [`execute`] runs one subcommand against any
//! [`DatasetProvider`] and returns the JSON text to print.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::api::{Axis, ExplorerConfig, ExplorerSession, InteractionEvent};
use crate::data::DatasetProvider;
use crate::error::{ExplorerError, ExplorerResult};

#[derive(Debug, Parser)]
#[command(name = "materx-explorer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore material properties through cascading filters and scatter series")]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dataset path or http(s) URL; overrides the configured source
    #[arg(short, long)]
    pub source: Option<String>,

    /// More log output on stderr (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the initial view (filter options, axes, empty series)
    View,

    /// Apply a JSON array of interaction events and print the final view
    Replay {
        /// Event script file
        #[arg(short, long)]
        events: PathBuf,

        /// What to print once the script has been applied
        #[arg(long, value_enum, default_value = "view")]
        output: ReplayOutput,
    },

    /// Print the scatter figure for a set of materials
    Plot {
        /// Material to plot; repeat for several
        #[arg(short, long = "material", required = true)]
        materials: Vec<String>,

        /// X-axis field
        #[arg(long)]
        x: Option<String>,

        /// Y-axis field
        #[arg(long)]
        y: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplayOutput {
    View,
    Figure,
}

impl Cli {
    /// Reads `--config` (or defaults), applies `--source` and validates.
    pub fn resolve_config(&self) -> ExplorerResult<ExplorerConfig> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load_from_path(path)?,
            None => ExplorerConfig::default(),
        };
        if let Some(source) = &self.source {
            config = config.with_source(source.clone());
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Loads the dataset from `provider` and runs `command`, returning JSON.
pub fn execute(
    command: &Command,
    config: &ExplorerConfig,
    provider: &dyn DatasetProvider,
) -> ExplorerResult<String> {
    let report = provider.load()?;
    info!(
        rows = report.dataset.len(),
        coercion_warnings = report.warnings.len(),
        "dataset ready"
    );
    let mut session = ExplorerSession::with_config(report.dataset, config)?;

    match command {
        Command::View => session.view_json_contract_v1_pretty(),
        Command::Replay { events, output } => {
            let script = read_event_script(events)?;
            session.dispatch_all(script)?;
            match output {
                ReplayOutput::View => session.view_json_contract_v1_pretty(),
                ReplayOutput::Figure => session.figure_json_contract_v1_pretty(),
            }
        }
        Command::Plot { materials, x, y } => {
            if let Some(field) = x {
                session.dispatch(InteractionEvent::axis_changed(Axis::X, field))?;
            }
            if let Some(field) = y {
                session.dispatch(InteractionEvent::axis_changed(Axis::Y, field))?;
            }
            session.dispatch(InteractionEvent::materials_changed(materials.iter().cloned()))?;
            session.figure_json_contract_v1_pretty()
        }
    }
}

fn read_event_script(path: &Path) -> ExplorerResult<Vec<InteractionEvent>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        ExplorerError::InvalidData(format!("failed to read `{}`: {e}", path.display()))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| ExplorerError::InvalidData(format!("invalid event script: {e}")))
}
