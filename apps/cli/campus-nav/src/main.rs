use campus_nav::cli::Cli;
use campus_nav::commands;
use campus_nav::error::NavAppError;
use campus_nav::logger::initialize as LoggerInitialize;
use campus_nav::report::CommandReport;
use campus_nav::settings::{self, BASE_URL_ENV_VAR};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(&cli).await {
        Ok(report) => {
            print_report(&report, cli.json);
            if report.is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{e}");
            if cli.json {
                println!("{}", serde_json::to_string(&e).unwrap_or_default());
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<CommandReport, NavAppError> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let log_dir = settings::log_dir(cli)?;
    LoggerInitialize(&log_dir, cli.verbose)?;
    info!("campus-nav starting, logging to {}", log_dir.display());

    let config = settings::load_config(cli, std::env::var(BASE_URL_ENV_VAR).ok())?;
    info!("Routing service: {}", config.server.base_url);

    commands::run(&cli.command, &config).await
}

fn print_report(report: &CommandReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{text}"),
            Err(e) => error!("Failed to serialize report: {e}"),
        }
    } else {
        print!("{report}");
    }
}
