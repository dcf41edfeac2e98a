//! Command-line host for the material explorer.
//!
//! Loads the dataset once, then prints the derived view, a replayed
//! session, or a single figure as JSON on stdout.

use clap::Parser;

use materx_explorer::cli::{Cli, execute};
use materx_explorer::data::SourceProvider;
use materx_explorer::{ExplorerResult, telemetry};

fn main() {
    let cli = Cli::parse();
    let _ = telemetry::init_tracing(cli.log_directive());
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> ExplorerResult<()> {
    let config = cli.resolve_config()?;
    let provider = SourceProvider::new(config.dataset_source(), config.schema()?);
    let output = execute(&cli.command, &config, &provider)?;
    println!("{output}");
    Ok(())
}
