use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PatientFilter {
    pub name_contains: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DoctorFilter {
    pub name_contains: Option<String>,
    pub specialization: Option<String>,
}

/// Date bounds are inclusive.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub doctor_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
