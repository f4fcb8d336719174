pub mod types;
pub mod logging;

use clap::Parser;
use log::error;

use crate::config::{self, Config};
use crate::processor;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = Config {
        files: cli.files,
        top: cli.top,
        parts: cli.parts,
        output: cli.output,
    };

    // Invocation misuse is fatal before any document is touched
    if let Err(e) = config::validate_config(&config) {
        error!("Error: {}", e);
        std::process::exit(1);
    }

    processor::process_batch(&config);
}
