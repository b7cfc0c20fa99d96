//! Shared types for the API layer: router state and query-string shapes.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::core_state::ClinicState;
use crate::models::{AppointmentFilter, DoctorFilter, PatientFilter};
use crate::records;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<ClinicState>,
}

impl ApiContext {
    pub fn new(core: Arc<ClinicState>) -> Self {
        Self { core }
    }
}

/// Returned by every create; update returns the same shape for symmetry.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: i64,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ═══════════════════════════════════════════════════════════
// Listing query strings
// ═══════════════════════════════════════════════════════════

/// `?q=&city=`
#[derive(Debug, Default, Deserialize)]
pub struct PatientQuery {
    pub q: Option<String>,
    pub city: Option<String>,
}

impl From<PatientQuery> for PatientFilter {
    fn from(query: PatientQuery) -> Self {
        PatientFilter {
            name_contains: present(query.q),
            city: present(query.city),
        }
    }
}

/// `?q=&spec=`
#[derive(Debug, Default, Deserialize)]
pub struct DoctorQuery {
    pub q: Option<String>,
    pub spec: Option<String>,
}

impl From<DoctorQuery> for DoctorFilter {
    fn from(query: DoctorQuery) -> Self {
        DoctorFilter {
            name_contains: present(query.q),
            specialization: present(query.spec),
        }
    }
}

/// `?doctor_id=&patient_id=&start=&end=`
///
/// Values stay strings here so a blank form field reads as "no filter"
/// instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentQuery {
    pub doctor_id: Option<String>,
    pub patient_id: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TryFrom<AppointmentQuery> for AppointmentFilter {
    type Error = ApiError;

    fn try_from(query: AppointmentQuery) -> Result<Self, Self::Error> {
        let id = |value: Option<String>, field: &'static str| -> Result<Option<i64>, ApiError> {
            present(value)
                .map(|v| records::parse_id(&v, field).map_err(ApiError::from))
                .transpose()
        };
        let day = |value: Option<String>, field: &'static str| -> Result<Option<NaiveDate>, ApiError> {
            present(value)
                .map(|v| {
                    records::parse_calendar_date(&v).ok_or_else(|| ApiError::Validation {
                        field,
                        message: "must be a date in YYYY-MM-DD format".into(),
                    })
                })
                .transpose()
        };

        Ok(AppointmentFilter {
            doctor_id: id(query.doctor_id, "doctor_id")?,
            patient_id: id(query.patient_id, "patient_id")?,
            date_from: day(query.start, "start")?,
            date_to: day(query.end, "end")?,
        })
    }
}
