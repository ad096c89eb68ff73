//! HTTP endpoint that answers metrics queries against the loaded dataset.
//!
//! `OPTIONS` is answered as a CORS preflight, `POST` bodies are decoded into a
//! [`MetricsQuery`](crate::metrics::MetricsQuery) and every other method gets
//! `405`. Each connection carries exactly one request.
mod handler;
mod http;
mod state;


use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::{AppError, AppResult, ServerError};
use crate::shutdown::ShutdownReceiver;

pub use state::ServerState;

/// Binds the listener for the metrics endpoint.
///
/// # Errors
///
/// Returns an error when the address cannot be bound.
pub async fn bind(addr: &str) -> AppResult<TcpListener> {
    TcpListener::bind(addr).await.map_err(|err| {
        AppError::server(ServerError::Bind {
            addr: addr.to_owned(),
            source: err,
        })
    })
}

/// Accepts connections until a shutdown signal arrives. Every connection is
/// served on its own task against the shared, read-only state.
pub async fn serve(
    listener: TcpListener,
    state: Arc<ServerState>,
    mut shutdown_rx: ShutdownReceiver,
) {
    if let Ok(addr) = listener.local_addr() {
        info!("Metrics endpoint listening on {}", addr);
    }

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                info!("Shutdown requested, no longer accepting connections");
                break;
            }
            accepted = listener.accept() => {
                let (socket, peer) = match accepted {
                    Ok(result) => result,
                    Err(err) => {
                        warn!("Failed to accept connection: {}", err);
                        continue;
                    }
                };
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    handler::handle_connection(socket, peer, &state).await;
                });
            }
        }
    }
}
