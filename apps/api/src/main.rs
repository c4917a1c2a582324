use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::{create_app, health_router, ShutdownCoordinator};
use core_config::app_info;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::cassandra::{
    connect_from_config_with_retry, create_keyspace_if_not_exists, use_keyspace,
};
use domain_events::{EventGenerator, EventService, ScyllaEventRepository};
use domain_people::{PersonService, ScyllaPersonRepository};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

mod api;
mod config;
mod openapi;

use config::Config;
use openapi::ApiDoc;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for readable error reports
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connect without a keyspace first; it may not exist yet
    let mut store_config = config.cassandra.clone();
    store_config.keyspace = None;
    let session = connect_from_config_with_retry(&store_config, None).await?;

    let keyspace = config.keyspace();
    create_keyspace_if_not_exists(&session, keyspace, config.cassandra.replication_factor).await?;
    use_keyspace(&session, keyspace).await?;

    let people_repository = ScyllaPersonRepository::new(session.clone());
    people_repository.create_tables().await?;

    let event_repository = ScyllaEventRepository::new(session.clone());
    event_repository.create_tables().await?;

    let people_service = PersonService::new(people_repository);
    let events_state = Arc::new(EventService::new(event_repository));

    let (shutdown, generator_rx) = ShutdownCoordinator::new();
    if config.generator.enabled {
        let generator = EventGenerator::new(
            events_state.clone(),
            Duration::from_secs(config.generator.interval_secs),
        );
        tokio::spawn(generator.run(generator_rx));
    }

    let app = Router::new()
        .nest("/people", domain_people::handlers::router(people_service))
        .nest(
            "/events",
            domain_events::handlers::events_router().with_state(events_state.clone()),
        )
        .nest("/locations", api::locations::router())
        .merge(api::ready::router(session.clone()))
        .merge(health_router(app_info!()))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http());

    create_app(app, &config.server).await?;

    // Server drained; stop background tasks
    shutdown.shutdown();
    info!("Shutdown complete");
    Ok(())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
