//! HTTP handlers for the people API

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::PersonResult;
use crate::models::{CreatePerson, Person, UpdatePerson};
use crate::repository::PersonRepository;
use crate::service::PersonService;

/// Create the people router with all HTTP endpoints
pub fn router<R: PersonRepository + 'static>(service: PersonService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_people).post(create_person))
        .route(
            "/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/country/{country}", get(list_by_country))
        .with_state(shared_service)
}

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people on record", body = Vec<Person>)
    ),
    tag = "people"
)]
pub async fn list_people<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
) -> PersonResult<Json<Vec<Person>>> {
    let people = service.list_people().await?;
    Ok(Json(people))
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/people",
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created", body = Person,
         headers(("Location" = String, description = "Path of the created person"))),
        (status = 400, description = "Validation error")
    ),
    tag = "people"
)]
pub async fn create_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePerson>,
) -> PersonResult<impl IntoResponse> {
    let person = service.create_person(input).await?;
    let location = format!("/people/{}", person.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(person),
    ))
}

/// Get a person by id
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(("id" = Uuid, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 404, description = "Person not found")
    ),
    tag = "people"
)]
pub async fn get_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(id): Path<Uuid>,
) -> PersonResult<Json<Person>> {
    let person = service.get_person(id).await?;
    Ok(Json(person))
}

/// Replace a person
#[utoipa::path(
    put,
    path = "/people/{id}",
    params(("id" = Uuid, Path, description = "Person id")),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 404, description = "Person not found"),
        (status = 400, description = "Validation error")
    ),
    tag = "people"
)]
pub async fn update_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdatePerson>,
) -> PersonResult<Json<Person>> {
    let person = service.update_person(id, input).await?;
    Ok(Json(person))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(("id" = Uuid, Path, description = "Person id")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Person not found")
    ),
    tag = "people"
)]
pub async fn delete_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(id): Path<Uuid>,
) -> PersonResult<impl IntoResponse> {
    service.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List people by country
#[utoipa::path(
    get,
    path = "/people/country/{country}",
    params(("country" = String, Path, description = "Country to filter by")),
    responses(
        (status = 200, description = "People in the given country", body = Vec<Person>)
    ),
    tag = "people"
)]
pub async fn list_by_country<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(country): Path<String>,
) -> PersonResult<Json<Vec<Person>>> {
    let people = service.list_by_country(&country).await?;
    Ok(Json(people))
}
