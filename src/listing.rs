//! Filtered list queries and the choice lists that go with them.
//!
//! Every criteria field becomes an `AND` clause over a fixed column with a
//! numbered bind parameter. Absent or blank fields add nothing. Choice lists
//! are always read from the full tables, never from the filtered rows.

use chrono::NaiveDate;
use rusqlite::types::ToSql;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::{
    appointment_row_from_row, doctor_from_row, patient_from_row, DatabaseError, Doctors, Patients,
    Repository,
};
use crate::models::*;

// ═══════════════════════════════════════════
// View types
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientListing {
    pub rows: Vec<Patient>,
    pub city_choices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorListing {
    pub rows: Vec<Doctor>,
    pub spec_choices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListing {
    pub rows: Vec<AppointmentRow>,
    pub patient_choices: Vec<PersonChoice>,
    pub doctor_choices: Vec<PersonChoice>,
}

/// Selector data for creating or editing an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentFormChoices {
    pub patients: Vec<PersonChoice>,
    pub doctors: Vec<DoctorChoice>,
}

// ═══════════════════════════════════════════
// Query builder
// ═══════════════════════════════════════════

/// Accumulates `AND` clauses and their bind parameters.
///
/// Column names are `&'static str`, so only statement text written in this
/// crate ever reaches the SQL string; caller values go through `params`.
pub(crate) struct FilterQuery {
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl FilterQuery {
    pub(crate) fn new() -> Self {
        Self {
            clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    fn push(&mut self, column: &'static str, op: &'static str, value: Box<dyn ToSql>) {
        self.params.push(value);
        self.clauses
            .push(format!(" AND {} {} ?{}", column, op, self.params.len()));
    }

    pub(crate) fn equals<T: ToSql + 'static>(&mut self, column: &'static str, value: Option<T>) {
        if let Some(v) = value {
            self.push(column, "=", Box::new(v));
        }
    }

    /// Exact text match; blank text is treated as absent.
    pub(crate) fn equals_text(&mut self, column: &'static str, value: Option<&str>) {
        if let Some(v) = non_blank(value) {
            self.push(column, "=", Box::new(v.to_string()));
        }
    }

    /// Substring match anywhere in the column. `%`, `_` and `\` in the
    /// needle match literally.
    pub(crate) fn contains(&mut self, column: &'static str, needle: Option<&str>) {
        if let Some(v) = non_blank(needle) {
            self.params.push(Box::new(format!("%{}%", escape_like(v))));
            self.clauses.push(format!(
                " AND {} LIKE ?{} ESCAPE '\\'",
                column,
                self.params.len()
            ));
        }
    }

    pub(crate) fn at_least(&mut self, column: &'static str, bound: Option<NaiveDate>) {
        if let Some(d) = bound {
            self.push(column, ">=", Box::new(d));
        }
    }

    pub(crate) fn at_most(&mut self, column: &'static str, bound: Option<NaiveDate>) {
        if let Some(d) = bound {
            self.push(column, "<=", Box::new(d));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub(crate) fn sql_suffix(&self) -> String {
        self.clauses.join("")
    }

    pub(crate) fn param_refs(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ═══════════════════════════════════════════
// Listings
// ═══════════════════════════════════════════

/// Runs every read of one listing inside a single deferred transaction,
/// so rows and choice lists come from the same snapshot.
pub(crate) fn read_snapshot<T>(
    conn: &Connection,
    body: impl FnOnce(&Connection) -> Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    let tx = conn.unchecked_transaction()?;
    let value = body(&*tx)?;
    tx.commit()?;
    Ok(value)
}

/// Patients matching `filter` by id ascending, plus every known city.
pub fn list_patients(
    conn: &Connection,
    filter: &PatientFilter,
) -> Result<PatientListing, DatabaseError> {
    let mut query = FilterQuery::new();
    query.contains("name", filter.name_contains.as_deref());
    query.equals_text("city", filter.city.as_deref());

    let listing = read_snapshot(conn, |conn| {
        let rows = if query.is_empty() {
            Patients::list(conn)?
        } else {
            let sql = format!(
                "SELECT patient_id, name, age, gender, city
                 FROM patients
                 WHERE 1=1{}
                 ORDER BY patient_id ASC",
                query.sql_suffix()
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(query.param_refs().as_slice(), patient_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };

        let city_choices =
            distinct_values(conn, "SELECT DISTINCT city FROM patients ORDER BY city")?;
        Ok(PatientListing { rows, city_choices })
    })?;

    tracing::debug!(rows = listing.rows.len(), "Listed patients");
    Ok(listing)
}

/// Doctors matching `filter` by id ascending, plus every known specialization.
pub fn list_doctors(
    conn: &Connection,
    filter: &DoctorFilter,
) -> Result<DoctorListing, DatabaseError> {
    let mut query = FilterQuery::new();
    query.contains("name", filter.name_contains.as_deref());
    query.equals_text("specialization", filter.specialization.as_deref());

    let listing = read_snapshot(conn, |conn| {
        let rows = if query.is_empty() {
            Doctors::list(conn)?
        } else {
            let sql = format!(
                "SELECT doctor_id, name, specialization
                 FROM doctors
                 WHERE 1=1{}
                 ORDER BY doctor_id ASC",
                query.sql_suffix()
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(query.param_refs().as_slice(), doctor_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };

        let spec_choices = distinct_values(
            conn,
            "SELECT DISTINCT specialization FROM doctors ORDER BY specialization",
        )?;
        Ok(DoctorListing { rows, spec_choices })
    })?;

    tracing::debug!(rows = listing.rows.len(), "Listed doctors");
    Ok(listing)
}

/// Appointments matching `filter`, newest date first, each with its status
/// relative to `today`.
pub fn list_appointments(
    conn: &Connection,
    filter: &AppointmentFilter,
    today: NaiveDate,
) -> Result<AppointmentListing, DatabaseError> {
    let mut query = FilterQuery::new();
    query.equals("a.doctor_id", filter.doctor_id);
    query.equals("a.patient_id", filter.patient_id);
    query.at_least("a.appointment_date", filter.date_from);
    query.at_most("a.appointment_date", filter.date_to);

    let sql = format!(
        "SELECT a.appointment_id, a.patient_id, a.doctor_id, a.appointment_date, a.notes,
                p.name AS patient_name, d.name AS doctor_name
         FROM appointments a
         JOIN patients p ON a.patient_id = p.patient_id
         JOIN doctors d ON a.doctor_id = d.doctor_id
         WHERE 1=1{}
         ORDER BY a.appointment_date DESC, a.appointment_id DESC",
        query.sql_suffix()
    );

    let listing = read_snapshot(conn, |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(query.param_refs().as_slice(), |row| {
                appointment_row_from_row(row, today)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let patient_choices = person_choices(
            conn,
            "SELECT patient_id AS id, name FROM patients ORDER BY name, patient_id",
        )?;
        let doctor_choices = person_choices(
            conn,
            "SELECT doctor_id AS id, name FROM doctors ORDER BY name, doctor_id",
        )?;
        Ok(AppointmentListing {
            rows,
            patient_choices,
            doctor_choices,
        })
    })?;

    tracing::debug!(rows = listing.rows.len(), "Listed appointments");
    Ok(listing)
}

/// Patients and doctors (with specialization) for appointment entry.
pub fn appointment_form_choices(conn: &Connection) -> Result<AppointmentFormChoices, DatabaseError> {
    read_snapshot(conn, |conn| {
        let patients = person_choices(
            conn,
            "SELECT patient_id AS id, name FROM patients ORDER BY name, patient_id",
        )?;

        let mut stmt = conn.prepare(
            "SELECT doctor_id, name, specialization FROM doctors ORDER BY name, doctor_id",
        )?;
        let doctors = stmt
            .query_map([], |row| {
                Ok(DoctorChoice {
                    id: row.get("doctor_id")?,
                    name: row.get("name")?,
                    specialization: row.get("specialization")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AppointmentFormChoices { patients, doctors })
    })
}

fn distinct_values(conn: &Connection, sql: &'static str) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare(sql)?;
    let values = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(values)
}

fn person_choices(conn: &Connection, sql: &'static str) -> Result<Vec<PersonChoice>, DatabaseError> {
    let mut stmt = conn.prepare(sql)?;
    let choices = stmt
        .query_map([], |row| {
            Ok(PersonChoice {
                id: row.get("id")?,
                name: row.get("name")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(choices)
}
