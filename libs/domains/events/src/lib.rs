//! Events Domain
//!
//! Read-only queries over time-ordered event records partitioned by type
//! and clustered by start time descending. The only write path is the
//! internal [`generator`], which is disabled by default; events are not
//! created over HTTP.

pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod scylla;
pub mod service;

// Re-export commonly used types
pub use error::{EventError, EventResult};
pub use generator::EventGenerator;
pub use models::{Event, NewEvent};
pub use repository::{EventRepository, InMemoryEventRepository};
pub use self::scylla::ScyllaEventRepository;
pub use service::EventService;
