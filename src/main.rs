//! Boiler CLI — minimal recipe-driven build runner.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "boiler",
    version,
    about = "Minimal recipe-driven build runner — declarative targets, depth-first dependencies"
)]
struct Cli {
    #[command(subcommand)]
    command: boiler::cli::Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = boiler::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
