//! HTTP handlers for the events API

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::EventResult;
use crate::models::Event;
use crate::repository::EventRepository;
use crate::service::EventService;

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router.
///
/// State is applied by the caller, so the same service can also be handed
/// to the generator.
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route("/", get(list_events::<R>))
        .route("/{event_type}", get(list_by_type::<R>))
}

/// Optional strict lower bound for the by-type query
#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    /// RFC 3339 instant; only events strictly after it are returned
    pub time: Option<DateTime<Utc>>,
}

/// List every event
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events; ordering across types is undefined",
         body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
) -> EventResult<Json<Vec<Event>>> {
    let events = state.list_events().await?;
    Ok(Json(events))
}

/// List events of one type, newest first, optionally bounded below
#[utoipa::path(
    get,
    path = "/events/{type}",
    params(
        ("type" = String, Path, description = "Event type"),
        ("time" = Option<String>, Query,
         description = "RFC 3339 instant; only events strictly after it are returned")
    ),
    responses(
        (status = 200, description = "Events of the given type, newest first",
         body = Vec<Event>),
        (status = 400, description = "Unparsable time bound")
    ),
    tag = "events"
)]
pub async fn list_by_type<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(event_type): Path<String>,
    Query(query): Query<TimeQuery>,
) -> EventResult<Json<Vec<Event>>> {
    let events = match query.time {
        Some(time) => state.list_by_type_after(&event_type, time).await?,
        None => state.list_by_type(&event_type).await?,
    };
    Ok(Json(events))
}
