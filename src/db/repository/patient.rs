use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Repository;
use crate::db::DatabaseError;
use crate::models::*;

pub struct Patients;

pub(crate) fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        patient_id: row.get("patient_id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        gender: row.get("gender")?,
        city: row.get("city")?,
    })
}

impl Repository for Patients {
    type Entity = Patient;
    type Fields = NewPatient;
    const KIND: EntityKind = EntityKind::Patient;

    fn get(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
        let patient = conn
            .query_row(
                "SELECT patient_id, name, age, gender, city FROM patients WHERE patient_id = ?1",
                params![id],
                patient_from_row,
            )
            .optional()?;
        Ok(patient)
    }

    fn list(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
        let mut stmt = conn.prepare(
            "SELECT patient_id, name, age, gender, city FROM patients ORDER BY patient_id ASC",
        )?;
        let rows = stmt.query_map([], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
    }

    fn insert(conn: &Connection, fields: &NewPatient) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO patients (name, age, gender, city) VALUES (?1, ?2, ?3, ?4)",
            params![fields.name, fields.age, fields.gender, fields.city],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, id: i64, fields: &NewPatient) -> Result<(), DatabaseError> {
        let updated = conn.execute(
            "UPDATE patients SET name = ?1, age = ?2, gender = ?3, city = ?4 WHERE patient_id = ?5",
            params![fields.name, fields.age, fields.gender, fields.city, id],
        )?;
        super::ensure_affected(updated, Self::KIND, id)
    }

    fn delete(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
        let deleted = conn.execute("DELETE FROM patients WHERE patient_id = ?1", params![id])?;
        super::ensure_affected(deleted, Self::KIND, id)
    }
}
