//! Server entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, build the store and serve HTTP.
//! - Report startup failures on stderr with a non-zero exit code.

use bankrec_core::{init_logging, BankService, InMemoryBankRepository};
use bankrec_http::{serve, AppState, ServerConfig};
use log::{error, info};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error");
            eprintln!("bankrec: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    let log_dir = config.log_dir.to_string_lossy();
    init_logging(&config.log_level, &log_dir)?;

    let repo = if config.seed_sample {
        InMemoryBankRepository::with_sample_data()
    } else {
        InMemoryBankRepository::new()
    };
    let service = BankService::new(repo);
    info!(
        "event=store_ready module=cli status=ok seeded={} count={}",
        config.seed_sample,
        service.repo().len()
    );

    println!(
        "bankrec {} listening on http://{}",
        bankrec_core::core_version(),
        config.addr
    );
    serve(&config, AppState::new(service))
        .await
        .map_err(|err| format!("server failed on {}: {err}", config.addr))
}
