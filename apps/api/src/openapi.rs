use utoipa::OpenApi;

use crate::api::locations::Location;
use domain_events::Event;
use domain_people::{CreatePerson, Person, UpdatePerson};

/// OpenAPI document for the census service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "census",
        description = "People and events over a Cassandra dual-table store"
    ),
    paths(
        domain_people::handlers::list_people,
        domain_people::handlers::create_person,
        domain_people::handlers::get_person,
        domain_people::handlers::update_person,
        domain_people::handlers::delete_person,
        domain_people::handlers::list_by_country,
        domain_events::handlers::list_events,
        domain_events::handlers::list_by_type,
        crate::api::locations::get_location,
    ),
    components(schemas(Person, CreatePerson, UpdatePerson, Event, Location)),
    tags(
        (name = "people", description = "Person CRUD"),
        (name = "events", description = "Time-ordered event queries"),
        (name = "locations", description = "Static demo data")
    )
)]
pub struct ApiDoc;
