//! People Domain
//!
//! CRUD over `Person` records kept in two Cassandra tables: a primary table
//! keyed by id and a denormalized `people_by_country` table keyed by the
//! country query attribute. The repository keeps both tables in sync on
//! every write (best-effort dual-write, no cross-table atomicity).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id generation, validation, not-found mapping
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← dual-table access (trait + implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_people::{handlers, InMemoryPersonRepository, PersonService};
//!
//! let repository = InMemoryPersonRepository::new();
//! let service = PersonService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod scylla;
pub mod service;

// Re-export commonly used types
pub use error::{PersonError, PersonResult};
pub use models::{CreatePerson, Person, UpdatePerson};
pub use repository::{InMemoryPersonRepository, PersonRepository};
pub use self::scylla::ScyllaPersonRepository;
pub use service::PersonService;
