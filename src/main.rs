// Module declarations
mod cli;
mod config;
mod processor;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
