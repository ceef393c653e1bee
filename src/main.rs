use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod gaps;
mod library;
mod report;
mod runtime;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match runtime::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            println!("Exiting...");
            ExitCode::from(e.exit_code())
        }
    }
}
