use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::Repository;
use crate::db::DatabaseError;
use crate::models::*;
use crate::status::derive_status;

pub struct Appointments;

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        appointment_id: row.get("appointment_id")?,
        patient_id: row.get("patient_id")?,
        doctor_id: row.get("doctor_id")?,
        appointment_date: row.get("appointment_date")?,
        notes: row.get("notes")?,
    })
}

/// Maps a row of the patient/doctor join; expects `patient_name` and
/// `doctor_name` aliases.
pub(crate) fn appointment_row_from_row(
    row: &Row<'_>,
    today: NaiveDate,
) -> rusqlite::Result<AppointmentRow> {
    let appointment_date: NaiveDate = row.get("appointment_date")?;
    Ok(AppointmentRow {
        appointment_id: row.get("appointment_id")?,
        patient_id: row.get("patient_id")?,
        patient_name: row.get("patient_name")?,
        doctor_id: row.get("doctor_id")?,
        doctor_name: row.get("doctor_name")?,
        appointment_date,
        notes: row.get("notes")?,
        status: derive_status(appointment_date, today),
    })
}

/// Single appointment with patient/doctor names, as an edit form shows it.
pub fn get_appointment_row(
    conn: &Connection,
    id: i64,
    today: NaiveDate,
) -> Result<Option<AppointmentRow>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT a.appointment_id, a.patient_id, a.doctor_id, a.appointment_date, a.notes,
                    p.name AS patient_name, d.name AS doctor_name
             FROM appointments a
             JOIN patients p ON a.patient_id = p.patient_id
             JOIN doctors d ON a.doctor_id = d.doctor_id
             WHERE a.appointment_id = ?1",
            params![id],
            |row| appointment_row_from_row(row, today),
        )
        .optional()?;
    Ok(row)
}

impl Repository for Appointments {
    type Entity = Appointment;
    type Fields = NewAppointment;
    const KIND: EntityKind = EntityKind::Appointment;

    fn get(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
        let appointment = conn
            .query_row(
                "SELECT appointment_id, patient_id, doctor_id, appointment_date, notes
                 FROM appointments WHERE appointment_id = ?1",
                params![id],
                appointment_from_row,
            )
            .optional()?;
        Ok(appointment)
    }

    fn list(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
        let mut stmt = conn.prepare(
            "SELECT appointment_id, patient_id, doctor_id, appointment_date, notes
             FROM appointments ORDER BY appointment_date DESC, appointment_id DESC",
        )?;
        let rows = stmt.query_map([], appointment_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
    }

    fn insert(conn: &Connection, fields: &NewAppointment) -> Result<i64, DatabaseError> {
        conn.execute(
            "INSERT INTO appointments (patient_id, doctor_id, appointment_date, notes)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.patient_id,
                fields.doctor_id,
                fields.appointment_date,
                fields.notes,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(conn: &Connection, id: i64, fields: &NewAppointment) -> Result<(), DatabaseError> {
        let updated = conn.execute(
            "UPDATE appointments SET patient_id = ?1, doctor_id = ?2, appointment_date = ?3, notes = ?4
             WHERE appointment_id = ?5",
            params![
                fields.patient_id,
                fields.doctor_id,
                fields.appointment_date,
                fields.notes,
                id,
            ],
        )?;
        super::ensure_affected(updated, Self::KIND, id)
    }

    fn delete(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
        let deleted = conn.execute(
            "DELETE FROM appointments WHERE appointment_id = ?1",
            params![id],
        )?;
        super::ensure_affected(deleted, Self::KIND, id)
    }
}
