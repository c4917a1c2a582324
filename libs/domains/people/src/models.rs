use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Person entity.
///
/// Stored twice: in the `people` table under `id`, and in the
/// `people_by_country` table under `(country, first_name, last_name, id)`
/// with `age` as the payload. The id tiebreaker in the index key lets two
/// people with identical names and country coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    /// Unique identifier
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Query attribute for the secondary table
    pub country: String,
    pub age: i32,
}

impl Person {
    /// Create a new person with a generated id
    pub fn new(input: CreatePerson) -> Self {
        Self {
            id: Uuid::now_v7(),
            first_name: input.first_name,
            last_name: input.last_name,
            country: input.country,
            age: input.age,
        }
    }

    /// Build the replacement record for an update, keeping the existing id
    pub fn replaced(id: Uuid, input: UpdatePerson) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            country: input.country,
            age: input.age,
        }
    }

    /// Key of this person's row in the `people_by_country` table
    pub fn index_key(&self) -> (&str, &str, &str, Uuid) {
        (
            self.country.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.id,
        )
    }
}

/// DTO for creating a new person (id is generated server-side)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePerson {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
}

/// DTO for replacing an existing person.
///
/// A full replacement rather than a patch: the index key columns (names,
/// country) cannot be mutated in place in the store, so an update always
/// rewrites the whole record.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePerson {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
}
