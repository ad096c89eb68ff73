use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::metrics::MetricsQuery;

use super::http::{HttpRequest, HttpResponse, read_http_request, write_response};
use super::state::ServerState;

/// Message returned for every metrics request while the dataset is unavailable.
pub(crate) const DATA_UNAVAILABLE_MESSAGE: &str = "Data could not be loaded on the server.";
/// Time allowed for a client to deliver a complete request.
const REQUEST_READ_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) async fn handle_connection(socket: TcpStream, peer: SocketAddr, state: &ServerState) {
    serve_connection(socket, peer, state, REQUEST_READ_TIMEOUT).await;
}

/// Reads one request within `read_timeout` and writes its response. A client
/// that stalls past the timeout gets the connection closed without a reply.
pub(crate) async fn serve_connection<S>(
    mut socket: S,
    peer: SocketAddr,
    state: &ServerState,
    read_timeout: Duration,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let request = match tokio::time::timeout(read_timeout, read_http_request(&mut socket)).await {
        Ok(Ok(request)) => request,
        Ok(Err(err)) => {
            debug!("Rejected request from {}: {} {}", peer, err.status, err.message);
            match HttpResponse::error(err.status, &err.message) {
                Ok(response) => send(&mut socket, &response, state).await,
                Err(build_err) => warn!("Failed to build error response: {}", build_err),
            }
            return;
        }
        Err(_elapsed) => {
            debug!("Timed out reading request from {}", peer);
            return;
        }
    };

    let response = match respond(state, &request) {
        Ok(response) => response,
        Err(err) => {
            warn!("Failed to build response for {}: {}", peer, err);
            HttpResponse {
                status: 500,
                body: None,
            }
        }
    };
    debug!(
        "{} {} from {} -> {}",
        request.method, request.path, peer, response.status
    );
    send(&mut socket, &response, state).await;
}

async fn send<S>(socket: &mut S, response: &HttpResponse, state: &ServerState)
where
    S: AsyncWrite + Unpin,
{
    if let Err(err) = write_response(socket, response, &state.cors_origin).await {
        debug!("Failed to write response: {}", err);
    }
}

/// Maps a framed request to its response. The path is not significant.
pub(crate) fn respond(state: &ServerState, request: &HttpRequest) -> AppResult<HttpResponse> {
    match request.method.as_str() {
        "OPTIONS" => Ok(HttpResponse::no_content()),
        "POST" => metrics_response(state, &request.body),
        _ => HttpResponse::error(405, "Method Not Allowed"),
    }
}

fn metrics_response(state: &ServerState, body: &[u8]) -> AppResult<HttpResponse> {
    let Some(table) = state.dataset.table() else {
        return HttpResponse::error(500, DATA_UNAVAILABLE_MESSAGE);
    };

    let query = match MetricsQuery::from_body(body, state.default_threshold_ms) {
        Ok(query) => query,
        Err(err) => return HttpResponse::error(400, &err.to_string()),
    };
    debug!(
        "Aggregating {} region(s) at threshold {}ms",
        query.regions.len(),
        query.threshold_ms
    );
    HttpResponse::json(200, &query.run(table))
}
