//! Write coordination: validate, then run exactly one insert/update/delete
//! inside a transaction that commits only on full success.
//!
//! The transaction is taken from the caller's connection on entry and rolled
//! back on every error path (validation included), so a failed write leaves
//! the store exactly as it was.

pub mod validation;

use rusqlite::{Connection, Transaction};
use thiserror::Error;

use crate::db::{Appointments, DatabaseError, Doctors, Patients, Repository};
use crate::models::*;

pub use validation::*;

// ═══════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════

/// Outcome classes the caller can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    ReferentialConflict,
    Store,
}

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    #[error("Referential conflict: {0}")]
    ReferentialConflict(String),

    #[error("Store error: {0}")]
    Store(DatabaseError),
}

impl ClinicError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ClinicError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClinicError::Validation { .. } => ErrorKind::Validation,
            ClinicError::NotFound { .. } => ErrorKind::NotFound,
            ClinicError::ReferentialConflict(_) => ErrorKind::ReferentialConflict,
            ClinicError::Store(_) => ErrorKind::Store,
        }
    }
}

impl From<DatabaseError> for ClinicError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, id } => ClinicError::NotFound { entity, id },
            DatabaseError::ForeignKeyViolation(detail) => ClinicError::ReferentialConflict(detail),
            other => ClinicError::Store(other),
        }
    }
}

impl From<rusqlite::Error> for ClinicError {
    fn from(err: rusqlite::Error) -> Self {
        DatabaseError::from(err).into()
    }
}

// ═══════════════════════════════════════════
// Transaction scope
// ═══════════════════════════════════════════

/// Runs `body` in a fresh transaction on `conn`.
///
/// Commits when `body` succeeds; otherwise rolls back and returns the
/// error unchanged. Dropping the guard on any early return also rolls back.
pub(crate) fn in_transaction<T>(
    conn: &Connection,
    operation: &'static str,
    entity: EntityKind,
    body: impl FnOnce(&Transaction<'_>) -> Result<T, ClinicError>,
) -> Result<T, ClinicError> {
    let tx = conn.unchecked_transaction()?;

    match body(&tx) {
        Ok(value) => {
            tx.commit()?;
            tracing::info!(%entity, operation, "Write committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::error!(%entity, operation, error = %rollback_err, "Rollback failed");
            }
            tracing::warn!(%entity, operation, error = %err, "Write rolled back");
            Err(err)
        }
    }
}

fn create<R: Repository>(
    conn: &Connection,
    validate: impl FnOnce() -> Result<R::Fields, ClinicError>,
    on_conflict: impl FnOnce(String) -> ClinicError,
) -> Result<i64, ClinicError> {
    in_transaction(conn, "create", R::KIND, |tx| {
        let fields = validate()?;
        R::insert(tx, &fields).map_err(|e| referential(e, on_conflict))
    })
}

fn update<R: Repository>(
    conn: &Connection,
    id: i64,
    validate: impl FnOnce() -> Result<R::Fields, ClinicError>,
    on_conflict: impl FnOnce(String) -> ClinicError,
) -> Result<(), ClinicError> {
    in_transaction(conn, "update", R::KIND, |tx| {
        let fields = validate()?;
        R::update(tx, id, &fields).map_err(|e| referential(e, on_conflict))
    })
}

fn delete<R: Repository>(conn: &Connection, id: i64) -> Result<(), ClinicError> {
    in_transaction(conn, "delete", R::KIND, |tx| {
        R::delete(tx, id).map_err(|e| {
            referential(e, |_| {
                ClinicError::ReferentialConflict(format!(
                    "{} {} is still referenced by an appointment",
                    R::KIND,
                    id
                ))
            })
        })
    })
}

/// Rewrites a foreign-key failure with operation context; other store
/// errors go through the usual classification.
fn referential(err: DatabaseError, on_conflict: impl FnOnce(String) -> ClinicError) -> ClinicError {
    match err {
        DatabaseError::ForeignKeyViolation(detail) => on_conflict(detail),
        other => other.into(),
    }
}

fn missing_party(_detail: String) -> ClinicError {
    ClinicError::ReferentialConflict(
        "appointment references a patient or doctor that does not exist".into(),
    )
}

// ═══════════════════════════════════════════
// Patients
// ═══════════════════════════════════════════

/// Returns the new patient's id.
pub fn create_patient(conn: &Connection, form: &PatientForm) -> Result<i64, ClinicError> {
    create::<Patients>(conn, || validate_patient(form), ClinicError::ReferentialConflict)
}

pub fn update_patient(conn: &Connection, id: i64, form: &PatientForm) -> Result<(), ClinicError> {
    update::<Patients>(conn, id, || validate_patient(form), ClinicError::ReferentialConflict)
}

/// Rejected with `ReferentialConflict` while any appointment references the patient.
pub fn delete_patient(conn: &Connection, id: i64) -> Result<(), ClinicError> {
    delete::<Patients>(conn, id)
}

// ═══════════════════════════════════════════
// Doctors
// ═══════════════════════════════════════════

pub fn create_doctor(conn: &Connection, form: &DoctorForm) -> Result<i64, ClinicError> {
    create::<Doctors>(conn, || validate_doctor(form), ClinicError::ReferentialConflict)
}

pub fn update_doctor(conn: &Connection, id: i64, form: &DoctorForm) -> Result<(), ClinicError> {
    update::<Doctors>(conn, id, || validate_doctor(form), ClinicError::ReferentialConflict)
}

pub fn delete_doctor(conn: &Connection, id: i64) -> Result<(), ClinicError> {
    delete::<Doctors>(conn, id)
}

// ═══════════════════════════════════════════
// Appointments
// ═══════════════════════════════════════════

pub fn create_appointment(conn: &Connection, form: &AppointmentForm) -> Result<i64, ClinicError> {
    create::<Appointments>(conn, || validate_appointment(form), missing_party)
}

pub fn update_appointment(
    conn: &Connection,
    id: i64,
    form: &AppointmentForm,
) -> Result<(), ClinicError> {
    update::<Appointments>(conn, id, || validate_appointment(form), missing_party)
}

pub fn delete_appointment(conn: &Connection, id: i64) -> Result<(), ClinicError> {
    delete::<Appointments>(conn, id)
}
