//! # Axum Helpers
//!
//! Utilities shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: the uniform error body and status-code mapping
//! - **[`extractors`]**: custom extractors (integer path ids, filter queries)
//! - **[`server`]**: router assembly, server startup, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{ApiError, ErrorResponse};

// Re-export extractors
pub use extractors::{FilterQuery, IdPath};

// Re-export server helpers
pub use server::{create_app, create_router, shutdown_signal};
