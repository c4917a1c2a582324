use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{PersonError, PersonResult};
use crate::models::{CreatePerson, Person, UpdatePerson};
use crate::repository::PersonRepository;

/// Service layer for Person operations.
///
/// Stateless; safe to share across concurrent callers.
#[derive(Clone)]
pub struct PersonService<R: PersonRepository> {
    repository: Arc<R>,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new person with a generated id
    pub async fn create_person(&self, input: CreatePerson) -> PersonResult<Person> {
        input.validate()?;

        let person = Person::new(input);
        self.repository.save(&person).await?;
        Ok(person)
    }

    /// Get a person by id; absent records surface as `NotFound` so the HTTP
    /// layer can answer 404 (distinct from an empty successful list).
    pub async fn get_person(&self, id: Uuid) -> PersonResult<Person> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))
    }

    /// Every person on record
    pub async fn list_people(&self) -> PersonResult<Vec<Person>> {
        self.repository.find_all().await
    }

    /// People registered in the given country
    pub async fn list_by_country(&self, country: &str) -> PersonResult<Vec<Person>> {
        self.repository.find_all_by_country(country).await
    }

    /// Replace a person's record.
    ///
    /// Reads the current record first: a missing id fails with `NotFound`
    /// rather than silently creating a record, and the read supplies the
    /// old index attributes so the stale secondary row can be cleaned up.
    pub async fn update_person(&self, id: Uuid, input: UpdatePerson) -> PersonResult<Person> {
        input.validate()?;

        let old = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))?;

        let updated = Person::replaced(id, input);
        self.repository.update(&old, &updated).await?;
        Ok(updated)
    }

    /// Delete a person's primary and secondary records
    pub async fn delete_person(&self, id: Uuid) -> PersonResult<()> {
        let person = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PersonError::NotFound(id))?;

        self.repository.delete(&person).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockPersonRepository;
    use crate::repository::InMemoryPersonRepository;

    fn create_input() -> CreatePerson {
        CreatePerson {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            country: "UK".to_string(),
            age: 50,
        }
    }

    fn update_input() -> UpdatePerson {
        UpdatePerson {
            first_name: "Laura".to_string(),
            last_name: "So".to_string(),
            country: "US".to_string(),
            age: 18,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let created = service.create_person(create_input()).await.unwrap();
        let fetched = service.get_person(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let mut input = create_input();
        input.country = String::new();

        let result = service.create_person(input).await;
        assert!(matches!(result, Err(PersonError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_person_is_not_found() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = PersonService::new(repo);
        let result = service.get_person(Uuid::now_v7()).await;

        assert!(matches!(result, Err(PersonError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing_person_does_not_create() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        // The dual-table update must never be issued for an unknown id
        repo.expect_update().times(0);

        let service = PersonService::new(repo);
        let result = service.update_person(Uuid::now_v7(), update_input()).await;

        assert!(matches!(result, Err(PersonError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_passes_old_record_for_cleanup() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let created = service.create_person(create_input()).await.unwrap();
        let updated = service
            .update_person(created.id, update_input())
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert!(service.list_by_country("UK").await.unwrap().is_empty());
        assert_eq!(service.list_by_country("US").await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let created = service.create_person(create_input()).await.unwrap();
        service.delete_person(created.id).await.unwrap();

        let result = service.get_person(created.id).await;
        assert!(matches!(result, Err(PersonError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_person_is_not_found() {
        let service = PersonService::new(InMemoryPersonRepository::new());

        let result = service.delete_person(Uuid::now_v7()).await;
        assert!(matches!(result, Err(PersonError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_all()
            .returning(|| Err(PersonError::store("connection reset")));

        let service = PersonService::new(repo);
        let result = service.list_people().await;

        assert!(matches!(result, Err(PersonError::Store(_))));
    }
}
