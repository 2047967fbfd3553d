use hasagi::cli::Cli;
use hasagi::logger;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match hasagi::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Config errors happen before the logger exists.
            if logger::is_initialized() {
                error!("{e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
