//! Entity store — one repository per entity, all SQL parameterized.
//!
//! Values always travel as bound parameters; statement text is static.

mod appointment;
mod doctor;
mod patient;

use rusqlite::Connection;

use super::DatabaseError;
use crate::models::EntityKind;

/// Base repository operations for any entity
pub trait Repository {
    type Entity;
    type Fields;
    const KIND: EntityKind;

    fn get(conn: &Connection, id: i64) -> Result<Option<Self::Entity>, DatabaseError>;
    /// All rows in the entity's default order.
    fn list(conn: &Connection) -> Result<Vec<Self::Entity>, DatabaseError>;
    /// Returns the store-assigned id.
    fn insert(conn: &Connection, fields: &Self::Fields) -> Result<i64, DatabaseError>;
    fn update(conn: &Connection, id: i64, fields: &Self::Fields) -> Result<(), DatabaseError>;
    fn delete(conn: &Connection, id: i64) -> Result<(), DatabaseError>;
}

fn ensure_affected(rows: usize, entity: EntityKind, id: i64) -> Result<(), DatabaseError> {
    if rows == 0 {
        return Err(DatabaseError::NotFound { entity, id });
    }
    Ok(())
}

pub use appointment::*;
pub use doctor::*;
pub use patient::*;
