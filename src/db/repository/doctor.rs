use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Repository;
use crate::db::DatabaseError;
use crate::models::*;

pub struct Doctors;

pub(crate) fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        doctor_id: row.get("doctor_id")?,
        name: row.get("name")?,
        specialization: row.get("specialization")?,
    })
}

impl Repository for Doctors {
    type Entity = Doctor;
    type Fields = NewDoctor;
    const KIND: EntityKind = EntityKind::Doctor;

    fn get(conn: &Connection, id: i64) -> Result<Option<Doctor>, DatabaseError> {
        let doctor = conn
            .query_row(
                "SELECT doctor_id, name, specialization FROM doctors WHERE doctor_id = ?1",
                params![id],
                doctor_from_row,
            )
            .optional()?;
        Ok(doctor)
    }

    fn list(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
        let mut stmt = conn.prepare(
            "SELECT doctor_id, name, specialization FROM doctors ORDER BY doctor_id ASC",
        )?;
        let rows = stmt.query_map([], doctor_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
    }

    fn insert(conn: &Connection, fields: &NewDoctor) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO doctors (name, specialization) VALUES (?1, ?2)",
            params![fields.name, fields.specialization],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, id: i64, fields: &NewDoctor) -> Result<(), DatabaseError> {
        let updated = conn.execute(
            "UPDATE doctors SET name = ?1, specialization = ?2 WHERE doctor_id = ?3",
            params![fields.name, fields.specialization, id],
        )?;
        super::ensure_affected(updated, Self::KIND, id)
    }

    fn delete(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
        let deleted = conn.execute("DELETE FROM doctors WHERE doctor_id = ?1", params![id])?;
        super::ensure_affected(deleted, Self::KIND, id)
    }
}
