//! # Axum Helpers
//!
//! Utilities shared by the HTTP-facing crates of this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured JSON error responses
//! - **[`extractors`]**: custom extractors (validated JSON bodies)
//! - **[`server`]**: server startup, health/readiness endpoints, graceful
//!   shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::ErrorResponse;

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, health_router,
    run_health_checks, shutdown_signal,
};
