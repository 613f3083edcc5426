use clap::Parser;
use metar_parser::cli::{self, Args};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    cli::setup_logging(&args);

    match cli::run(&args) {
        Ok(result) if result.stats.is_clean() => process::exit(0),
        Ok(_) => {
            // Failures have already been reported in the summary
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
