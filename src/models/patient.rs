use serde::{Deserialize, Serialize};

/// City stored when the caller leaves it blank.
pub const DEFAULT_CITY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: i64,
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
    pub city: String,
}

/// Validated patient fields, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: Option<String>,
    pub city: String,
}

/// Raw patient payload as submitted by a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "super::form_field::text_or_number")]
    pub age: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}
