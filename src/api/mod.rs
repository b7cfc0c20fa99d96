//! Clinic HTTP API.
//!
//! A thin JSON shell over the listing, stats and records layers. Routes are
//! nested under `/api/`; every request opens its own store connection.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::clinic_api_router;
pub use server::{serve, shutdown_signal};
pub use types::ApiContext;
