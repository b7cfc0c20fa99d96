//! Dashboard aggregations: grouped counts over the full tables.
//!
//! Groups with no rows never appear; there are no zero-filled buckets.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::DatabaseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationCount {
    pub specialization: String,
    pub count: i64,
}

/// `date` serializes as an ISO-8601 calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// All three aggregations in one read, for a dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub patients_by_city: Vec<CityCount>,
    pub doctors_by_specialization: Vec<SpecializationCount>,
    pub appointments_by_date: Vec<DateCount>,
}

pub fn patients_by_city(conn: &Connection) -> Result<Vec<CityCount>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT city, COUNT(*) AS cnt FROM patients GROUP BY city ORDER BY city",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(CityCount {
            city: row.get("city")?,
            count: row.get("cnt")?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn doctors_by_specialization(
    conn: &Connection,
) -> Result<Vec<SpecializationCount>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT specialization, COUNT(*) AS cnt FROM doctors
         GROUP BY specialization ORDER BY specialization",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(SpecializationCount {
            specialization: row.get("specialization")?,
            count: row.get("cnt")?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Appointment counts per day, oldest day first.
pub fn appointments_by_date(conn: &Connection) -> Result<Vec<DateCount>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT appointment_date, COUNT(*) AS cnt FROM appointments
         GROUP BY appointment_date ORDER BY appointment_date ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(DateCount {
            date: row.get("appointment_date")?,
            count: row.get("cnt")?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn dashboard_stats(conn: &Connection) -> Result<DashboardStats, DatabaseError> {
    Ok(DashboardStats {
        patients_by_city: patients_by_city(conn)?,
        doctors_by_specialization: doctors_by_specialization(conn)?,
        appointments_by_date: appointments_by_date(conn)?,
    })
}
