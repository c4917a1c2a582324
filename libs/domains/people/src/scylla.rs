//! Cassandra/ScyllaDB implementation of [`PersonRepository`].

use async_trait::async_trait;
use database::cassandra::CassandraSession;
use scylla::response::query_result::QueryResult;
use uuid::Uuid;

use crate::error::{PersonError, PersonResult};
use crate::models::Person;
use crate::repository::PersonRepository;

const INSERT_PERSON: &str = "INSERT INTO people \
     (person_id, first_name, last_name, country, age) VALUES (?, ?, ?, ?, ?)";

const INSERT_PERSON_BY_COUNTRY: &str = "INSERT INTO people_by_country \
     (country, first_name, last_name, person_id, age) VALUES (?, ?, ?, ?, ?)";

const DELETE_PERSON: &str = "DELETE FROM people WHERE person_id = ?";

const DELETE_PERSON_BY_COUNTRY: &str = "DELETE FROM people_by_country \
     WHERE country = ? AND first_name = ? AND last_name = ? AND person_id = ?";

/// Store-backed person repository over the `people` and `people_by_country`
/// tables.
#[derive(Clone)]
pub struct ScyllaPersonRepository {
    session: CassandraSession,
}

impl ScyllaPersonRepository {
    pub fn new(session: CassandraSession) -> Self {
        Self { session }
    }

    /// Create both tables if they don't exist
    pub async fn create_tables(&self) -> PersonResult<()> {
        self.session
            .query_unpaged(
                "CREATE TABLE IF NOT EXISTS people ( \
                     person_id uuid PRIMARY KEY, \
                     first_name text, \
                     last_name text, \
                     country text, \
                     age int)",
                &[],
            )
            .await
            .map_err(PersonError::store)?;

        self.session
            .query_unpaged(
                "CREATE TABLE IF NOT EXISTS people_by_country ( \
                     country text, \
                     first_name text, \
                     last_name text, \
                     person_id uuid, \
                     age int, \
                     PRIMARY KEY ((country), first_name, last_name, person_id))",
                &[],
            )
            .await
            .map_err(PersonError::store)?;

        tracing::info!("People tables ready");
        Ok(())
    }

    fn collect_rows(result: QueryResult) -> PersonResult<Vec<Person>> {
        let rows_result = result.into_rows_result().map_err(PersonError::store)?;
        let mut people = Vec::new();
        for row in rows_result
            .rows::<(String, String, String, Uuid, i32)>()
            .map_err(PersonError::store)?
        {
            let (country, first_name, last_name, id, age) = row.map_err(PersonError::store)?;
            people.push(Person {
                id,
                first_name,
                last_name,
                country,
                age,
            });
        }
        Ok(people)
    }

    fn insert_primary(&self, person: &Person) -> impl std::future::Future<Output = PersonResult<()>> {
        let session = self.session.clone();
        let person = person.clone();
        async move {
            session
                .query_unpaged(
                    INSERT_PERSON,
                    (
                        person.id,
                        person.first_name.as_str(),
                        person.last_name.as_str(),
                        person.country.as_str(),
                        person.age,
                    ),
                )
                .await
                .map_err(PersonError::store)?;
            Ok(())
        }
    }

    fn insert_secondary(
        &self,
        person: &Person,
    ) -> impl std::future::Future<Output = PersonResult<()>> {
        let session = self.session.clone();
        let person = person.clone();
        async move {
            session
                .query_unpaged(
                    INSERT_PERSON_BY_COUNTRY,
                    (
                        person.country.as_str(),
                        person.first_name.as_str(),
                        person.last_name.as_str(),
                        person.id,
                        person.age,
                    ),
                )
                .await
                .map_err(PersonError::store)?;
            Ok(())
        }
    }

    fn delete_secondary(
        &self,
        person: &Person,
    ) -> impl std::future::Future<Output = PersonResult<()>> {
        let session = self.session.clone();
        let person = person.clone();
        async move {
            session
                .query_unpaged(
                    DELETE_PERSON_BY_COUNTRY,
                    (
                        person.country.as_str(),
                        person.first_name.as_str(),
                        person.last_name.as_str(),
                        person.id,
                    ),
                )
                .await
                .map_err(PersonError::store)?;
            Ok(())
        }
    }
}

#[async_trait]
impl PersonRepository for ScyllaPersonRepository {
    async fn find_by_id(&self, id: Uuid) -> PersonResult<Option<Person>> {
        let result = self
            .session
            .query_unpaged(
                "SELECT first_name, last_name, country, age FROM people WHERE person_id = ?",
                (id,),
            )
            .await
            .map_err(PersonError::store)?;

        let rows_result = result.into_rows_result().map_err(PersonError::store)?;
        let row = rows_result
            .maybe_first_row::<(String, String, String, i32)>()
            .map_err(PersonError::store)?;

        Ok(row.map(|(first_name, last_name, country, age)| Person {
            id,
            first_name,
            last_name,
            country,
            age,
        }))
    }

    async fn find_all(&self) -> PersonResult<Vec<Person>> {
        let result = self
            .session
            .query_unpaged(
                "SELECT country, first_name, last_name, person_id, age FROM people_by_country",
                &[],
            )
            .await
            .map_err(PersonError::store)?;

        Self::collect_rows(result)
    }

    async fn find_all_by_country(&self, country: &str) -> PersonResult<Vec<Person>> {
        let result = self
            .session
            .query_unpaged(
                "SELECT country, first_name, last_name, person_id, age FROM people_by_country \
                 WHERE country = ?",
                (country,),
            )
            .await
            .map_err(PersonError::store)?;

        Self::collect_rows(result)
    }

    async fn save(&self, person: &Person) -> PersonResult<()> {
        // Both writes issued concurrently; completion is signaled only once
        // both have been acknowledged. No rollback on partial failure.
        tokio::try_join!(self.insert_primary(person), self.insert_secondary(person))?;

        tracing::info!(person_id = %person.id, country = %person.country, "Saved person");
        Ok(())
    }

    async fn update(&self, old: &Person, updated: &Person) -> PersonResult<()> {
        if old.index_key() == updated.index_key() {
            // Same index row: deleting it concurrently with the insert could
            // resolve in favor of the tombstone on a timestamp tie, so the
            // delete is skipped and the insert overwrites the payload.
            tokio::try_join!(self.insert_primary(updated), self.insert_secondary(updated))?;
        } else {
            tokio::try_join!(
                self.insert_primary(updated),
                self.insert_secondary(updated),
                self.delete_secondary(old)
            )?;
        }

        tracing::info!(person_id = %updated.id, "Updated person");
        Ok(())
    }

    async fn delete(&self, person: &Person) -> PersonResult<()> {
        let session = self.session.clone();
        let id = person.id;
        let delete_primary = async move {
            session
                .query_unpaged(DELETE_PERSON, (id,))
                .await
                .map_err(PersonError::store)?;
            Ok::<(), PersonError>(())
        };

        tokio::try_join!(delete_primary, self.delete_secondary(person))?;

        tracing::info!(person_id = %person.id, "Deleted person");
        Ok(())
    }
}
