use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: i64,
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialization: String,
}
