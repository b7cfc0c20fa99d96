//! API endpoint handlers.
//!
//! One module per resource. Handlers open a connection, call into the
//! listing/stats/records layers and translate the outcome; nothing else.

pub mod appointments;
pub mod doctors;
pub mod health;
pub mod patients;
pub mod stats;

use crate::api::error::ApiError;
use crate::records;

/// Parse an `:id` path segment as a positive identifier.
pub(crate) fn path_id(raw: &str) -> Result<i64, ApiError> {
    records::parse_id(raw, "id").map_err(ApiError::from)
}
