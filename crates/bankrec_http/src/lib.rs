//! HTTP transport for the bank record store.
//!
//! # Responsibility
//! - Map `/api/banks` requests onto `BankService` calls.
//! - Translate `StoreError` into HTTP status codes.
//!
//! # Invariants
//! - Handlers add no business rules; the service decides every outcome.

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{router, AppState};

use bankrec_core::BankRepository;
use log::info;
use tokio::net::TcpListener;

/// Binds `config.addr` and serves the bank API until the process stops.
pub async fn serve<R>(config: &ServerConfig, state: AppState<R>) -> std::io::Result<()>
where
    R: BankRepository + 'static,
{
    let listener = TcpListener::bind(config.addr).await?;
    info!(
        "event=server_listen module=http status=ok addr={}",
        listener.local_addr()?
    );
    axum::serve(listener, router(state)).await
}
