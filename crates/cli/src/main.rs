// crates/cli/src/main.rs
use std::process::ExitCode;

use clap::Parser;
use closed_range_cli::args::Args;
use closed_range_cli::config::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    match closed_range_cli::run(&args.command, &config, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
