//! Static demo location endpoint.
//!
//! There is no location store; the handler answers with a fixed street and
//! country and echoes the requested id back.

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub street: String,
    pub country: String,
}

pub fn router() -> Router {
    Router::new().route("/{id}", get(get_location))
}

/// Get the demo location
#[utoipa::path(
    get,
    path = "/locations/{id}",
    params(("id" = Uuid, Path, description = "Echoed back, not looked up")),
    responses(
        (status = 200, description = "Static demo location", body = Location)
    ),
    tag = "locations"
)]
pub async fn get_location(Path(id): Path<Uuid>) -> Json<Location> {
    Json(Location {
        id,
        street: "Westminster".to_string(),
        country: "UK".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_id_is_echoed() {
        let id = Uuid::now_v7();
        let Json(location) = get_location(Path(id)).await;
        assert_eq!(location.id, id);
        assert_eq!(location.street, "Westminster");
        assert_eq!(location.country, "UK");
    }
}
