use clap::Parser;
use std::process::ExitCode;
use tined_bin::cli::Cli;
use tined_log::LogConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file.
    let _log_guard = match tined_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        },
    };

    match tined_bin::run(cli) {
        Ok(exit) => {
            tracing::debug!(?exit, "exiting");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}
