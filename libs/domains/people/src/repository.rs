use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::PersonResult;
use crate::models::Person;

/// Repository trait for the dual-table person store.
///
/// Implementations keep a primary record (keyed by id) and a secondary
/// index record (keyed by country + names + id) consistent on every write.
/// The writes are best-effort: both are always issued and jointly awaited,
/// but there is no cross-table transaction, so a crash between
/// acknowledgements can leave one table ahead of the other.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Look up a person by id. Reads the primary table only.
    async fn find_by_id(&self, id: Uuid) -> PersonResult<Option<Person>>;

    /// Every person, read from the secondary table.
    async fn find_all(&self) -> PersonResult<Vec<Person>>;

    /// People in one country, read from the secondary table.
    async fn find_all_by_country(&self, country: &str) -> PersonResult<Vec<Person>>;

    /// Write the primary and secondary records for a new person.
    async fn save(&self, person: &Person) -> PersonResult<()>;

    /// Replace a person: upsert the primary record for `updated`, insert
    /// the secondary record for `updated`, and delete `old`'s secondary
    /// record when its key changed.
    async fn update(&self, old: &Person, updated: &Person) -> PersonResult<()>;

    /// Delete both records for the given person.
    async fn delete(&self, person: &Person) -> PersonResult<()>;
}

/// Key of a row in the secondary table
type CountryKey = (String, String, String, Uuid);

fn country_key(person: &Person) -> CountryKey {
    (
        person.country.clone(),
        person.first_name.clone(),
        person.last_name.clone(),
        person.id,
    )
}

fn person_from_index(key: &CountryKey, age: i32) -> Person {
    Person {
        id: key.3,
        first_name: key.1.clone(),
        last_name: key.2.clone(),
        country: key.0.clone(),
        age,
    }
}

#[derive(Debug, Default)]
struct Tables {
    /// Primary table: id -> person
    people: HashMap<Uuid, Person>,
    /// Secondary table: (country, first_name, last_name, id) -> age
    people_by_country: BTreeMap<CountryKey, i32>,
}

/// In-memory implementation of [`PersonRepository`] (for development and
/// testing). Mirrors the two-table layout so tests exercise the same
/// reconstruction path as the store-backed implementation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPersonRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_by_id(&self, id: Uuid) -> PersonResult<Option<Person>> {
        let tables = self.tables.read().await;
        Ok(tables.people.get(&id).cloned())
    }

    async fn find_all(&self) -> PersonResult<Vec<Person>> {
        let tables = self.tables.read().await;
        Ok(tables
            .people_by_country
            .iter()
            .map(|(key, age)| person_from_index(key, *age))
            .collect())
    }

    async fn find_all_by_country(&self, country: &str) -> PersonResult<Vec<Person>> {
        let tables = self.tables.read().await;
        Ok(tables
            .people_by_country
            .iter()
            .filter(|(key, _)| key.0 == country)
            .map(|(key, age)| person_from_index(key, *age))
            .collect())
    }

    async fn save(&self, person: &Person) -> PersonResult<()> {
        let mut tables = self.tables.write().await;
        tables.people.insert(person.id, person.clone());
        tables
            .people_by_country
            .insert(country_key(person), person.age);

        tracing::info!(person_id = %person.id, country = %person.country, "Saved person");
        Ok(())
    }

    async fn update(&self, old: &Person, updated: &Person) -> PersonResult<()> {
        let mut tables = self.tables.write().await;
        tables.people.insert(updated.id, updated.clone());

        let old_key = country_key(old);
        let new_key = country_key(updated);
        if old_key != new_key {
            tables.people_by_country.remove(&old_key);
        }
        tables.people_by_country.insert(new_key, updated.age);

        tracing::info!(person_id = %updated.id, "Updated person");
        Ok(())
    }

    async fn delete(&self, person: &Person) -> PersonResult<()> {
        let mut tables = self.tables.write().await;
        tables.people.remove(&person.id);
        tables.people_by_country.remove(&country_key(person));

        tracing::info!(person_id = %person.id, "Deleted person");
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub PersonRepository {}

        #[async_trait]
        impl PersonRepository for PersonRepository {
            async fn find_by_id(&self, id: Uuid) -> PersonResult<Option<Person>>;
            async fn find_all(&self) -> PersonResult<Vec<Person>>;
            async fn find_all_by_country(&self, country: &str) -> PersonResult<Vec<Person>>;
            async fn save(&self, person: &Person) -> PersonResult<()>;
            async fn update(&self, old: &Person, updated: &Person) -> PersonResult<()>;
            async fn delete(&self, person: &Person) -> PersonResult<()>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreatePerson;

    fn person(first: &str, last: &str, country: &str, age: i32) -> Person {
        Person::new(CreatePerson {
            first_name: first.to_string(),
            last_name: last.to_string(),
            country: country.to_string(),
            age,
        })
    }

    #[tokio::test]
    async fn test_save_then_find_by_id() {
        let repo = InMemoryPersonRepository::new();
        let john = person("John", "Doe", "UK", 50);

        repo.save(&john).await.unwrap();

        let found = repo.find_by_id(john.id).await.unwrap();
        assert_eq!(found, Some(john));
    }

    #[tokio::test]
    async fn test_save_creates_exactly_one_index_row() {
        let repo = InMemoryPersonRepository::new();
        let john = person("John", "Doe", "UK", 50);

        repo.save(&john).await.unwrap();

        let uk = repo.find_all_by_country("UK").await.unwrap();
        assert_eq!(uk, vec![john]);
        assert!(repo.find_all_by_country("US").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_name_same_country_are_distinct_rows() {
        let repo = InMemoryPersonRepository::new();
        let first = person("John", "Doe", "UK", 50);
        let second = person("John", "Doe", "UK", 30);

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let uk = repo.find_all_by_country("UK").await.unwrap();
        assert_eq!(uk.len(), 2);
    }

    #[tokio::test]
    async fn test_update_moves_index_row_across_countries() {
        let repo = InMemoryPersonRepository::new();
        let old = person("John", "Doe", "UK", 50);
        repo.save(&old).await.unwrap();

        let mut updated = old.clone();
        updated.country = "US".to_string();
        updated.age = 51;
        repo.update(&old, &updated).await.unwrap();

        assert!(repo.find_all_by_country("UK").await.unwrap().is_empty());
        let us = repo.find_all_by_country("US").await.unwrap();
        assert_eq!(us, vec![updated.clone()]);
        assert_eq!(repo.find_by_id(old.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_with_unchanged_country_keeps_one_index_row() {
        let repo = InMemoryPersonRepository::new();
        let old = person("John", "Doe", "UK", 50);
        repo.save(&old).await.unwrap();

        let mut updated = old.clone();
        updated.age = 51;
        repo.update(&old, &updated).await.unwrap();

        let uk = repo.find_all_by_country("UK").await.unwrap();
        assert_eq!(uk.len(), 1);
        assert_eq!(uk[0].age, 51);
    }

    #[tokio::test]
    async fn test_delete_removes_both_rows() {
        let repo = InMemoryPersonRepository::new();
        let john = person("John", "Doe", "UK", 50);
        repo.save(&john).await.unwrap();

        repo.delete(&john).await.unwrap();

        assert_eq!(repo.find_by_id(john.id).await.unwrap(), None);
        assert!(repo.find_all_by_country("UK").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_reads_index_table() {
        let repo = InMemoryPersonRepository::new();
        repo.save(&person("John", "Doe", "UK", 50)).await.unwrap();
        repo.save(&person("Laura", "So", "US", 18)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
