//! Readiness endpoint: ready only while the store answers a probe.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::cassandra::{check_health, CassandraSession};

pub fn router(session: CassandraSession) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(session)
}

async fn ready_handler(State(session): State<CassandraSession>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "cassandra",
        Box::pin(async move {
            if check_health(&session).await {
                Ok(())
            } else {
                Err("store probe failed".to_string())
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ok) => ok.into_response(),
        Err(err) => err.into_response(),
    }
}
