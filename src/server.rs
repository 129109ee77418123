//! The HTTP endpoint Prometheus scrapes.

use std::{future::Future, io};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use log::{info, warn};
use tokio::net::TcpListener;

use crate::{constants::METRICS_PATH, metrics::MetricsRegistry};

async fn handle_metrics(State(registry): State<MetricsRegistry>) -> Response {
    match registry.render() {
        Ok(body) => ([(header::CONTENT_TYPE, registry.content_type())], body).into_response(),
        Err(err) => {
            warn!("failed to render metrics: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn handle_index() -> &'static str {
    concat!(
        "Intel NPU exporter\n",
        "\n",
        "Metrics are served at /metrics\n"
    )
}

/// Build the axum router.
pub fn build_router(registry: MetricsRegistry) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route(METRICS_PATH, get(handle_metrics))
        .with_state(registry)
}

/// Serves the metrics endpoint on `listener` until `shutdown` completes.
pub async fn run_server<F>(
    listener: TcpListener, registry: MetricsRegistry, shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("serving metrics at http://{addr}{METRICS_PATH}");
    }

    axum::serve(listener, build_router(registry))
        .with_graceful_shutdown(shutdown)
        .await
}
