//! lang-tour - run the language-feature demos

mod cli;
mod config;
mod error;
mod executor;
mod logging;
mod output;

// Import tour-demos to link the demo plugins
use tour_demos as _;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tour_kit::RegistryBuilder;

fn main() {
    logging::init_tracing();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);
    tracing::debug!(?config, "resolved configuration");

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    let executor = Executor::new(registry, &config)?;

    if config.list {
        for line in output::format_listing(executor.selected()) {
            println!("{}", line);
        }
        return Ok(());
    }

    if executor.selected().is_empty() {
        println!("No demos found matching the specified filters.");
        return Ok(());
    }

    let formatter = OutputFormatter::new(config.verbose);
    let stats = executor.execute(|run| formatter.print_run(run))?;
    formatter.print_summary(&stats);

    Ok(())
}
