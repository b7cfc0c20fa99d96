//! Form payload checks. Each failure names the offending field.

use chrono::NaiveDate;

use super::ClinicError;
use crate::models::*;

pub fn validate_patient(form: &PatientForm) -> Result<NewPatient, ClinicError> {
    let name = required(&form.name, "name")?;

    let age_text = form.age.trim();
    let age: i64 = age_text
        .parse()
        .map_err(|_| ClinicError::invalid("age", "must be a whole number"))?;
    if age < 0 {
        return Err(ClinicError::invalid("age", "must not be negative"));
    }
    let age = u32::try_from(age).map_err(|_| ClinicError::invalid("age", "is out of range"))?;

    let city = optional(form.city.as_deref()).unwrap_or_else(|| DEFAULT_CITY.to_string());

    Ok(NewPatient {
        name,
        age,
        gender: optional(form.gender.as_deref()),
        city,
    })
}

pub fn validate_doctor(form: &DoctorForm) -> Result<NewDoctor, ClinicError> {
    Ok(NewDoctor {
        name: required(&form.name, "name")?,
        specialization: required(&form.specialization, "specialization")?,
    })
}

pub fn validate_appointment(form: &AppointmentForm) -> Result<NewAppointment, ClinicError> {
    let patient_id = parse_id(&form.patient_id, "patient_id")?;
    let doctor_id = parse_id(&form.doctor_id, "doctor_id")?;

    let date_text = required(&form.appointment_date, "appointment_date")?;
    let appointment_date = parse_calendar_date(&date_text)
        .ok_or_else(|| ClinicError::invalid("appointment_date", "must be a date in YYYY-MM-DD format"))?;

    Ok(NewAppointment {
        patient_id,
        doctor_id,
        appointment_date,
        notes: optional(form.notes.as_deref()),
    })
}

/// Strict `YYYY-MM-DD`: four-digit unsigned year, two-digit month and day.
///
/// The parsed date must print back to the same text, which rules out signed
/// or oversized years and unpadded fields the store would not hold as ISO.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == text).then_some(date)
}

/// Identifiers are positive integers.
pub fn parse_id(text: &str, field: &'static str) -> Result<i64, ClinicError> {
    match text.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ClinicError::invalid(field, "must be a valid identifier")),
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ClinicError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClinicError::invalid(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ClinicError) -> &'static str {
        match err {
            ClinicError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn patient_form(name: &str, age: &str, city: Option<&str>) -> PatientForm {
        PatientForm {
            name: name.into(),
            age: age.into(),
            gender: Some("F".into()),
            city: city.map(Into::into),
        }
    }

    #[test]
    fn patient_name_is_trimmed() {
        let p = validate_patient(&patient_form("  Jane Doe ", "34", Some("Austin"))).unwrap();
        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.age, 34);
        assert_eq!(p.city, "Austin");
    }

    #[test]
    fn blank_patient_name_rejected() {
        let err = validate_patient(&patient_form("   ", "34", None)).unwrap_err();
        assert_eq!(field_of(err), "name");
    }

    #[test]
    fn patient_age_must_be_non_negative_integer() {
        assert_eq!(field_of(validate_patient(&patient_form("J", "abc", None)).unwrap_err()), "age");
        assert_eq!(field_of(validate_patient(&patient_form("J", "-1", None)).unwrap_err()), "age");
        assert_eq!(field_of(validate_patient(&patient_form("J", "", None)).unwrap_err()), "age");
        assert_eq!(field_of(validate_patient(&patient_form("J", "3.5", None)).unwrap_err()), "age");
        assert_eq!(validate_patient(&patient_form("J", "0", None)).unwrap().age, 0);
    }

    #[test]
    fn blank_city_defaults_to_unknown() {
        assert_eq!(validate_patient(&patient_form("J", "1", Some(""))).unwrap().city, "Unknown");
        assert_eq!(validate_patient(&patient_form("J", "1", Some("  "))).unwrap().city, "Unknown");
        assert_eq!(validate_patient(&patient_form("J", "1", None)).unwrap().city, "Unknown");
    }

    #[test]
    fn blank_gender_stored_as_none() {
        let mut form = patient_form("J", "1", None);
        form.gender = Some(" ".into());
        assert_eq!(validate_patient(&form).unwrap().gender, None);
    }

    #[test]
    fn doctor_requires_name_and_specialization() {
        let err = validate_doctor(&DoctorForm { name: "".into(), specialization: "X".into() })
            .unwrap_err();
        assert_eq!(field_of(err), "name");
        let err = validate_doctor(&DoctorForm { name: "House".into(), specialization: " ".into() })
            .unwrap_err();
        assert_eq!(field_of(err), "specialization");
        let ok = validate_doctor(&DoctorForm {
            name: " House ".into(),
            specialization: " Diagnostics ".into(),
        })
        .unwrap();
        assert_eq!(ok.specialization, "Diagnostics");
    }

    #[test]
    fn appointment_ids_must_parse() {
        let form = AppointmentForm {
            patient_id: "x".into(),
            doctor_id: "1".into(),
            appointment_date: "2024-01-01".into(),
            notes: None,
        };
        assert_eq!(field_of(validate_appointment(&form).unwrap_err()), "patient_id");

        let form = AppointmentForm { patient_id: "1".into(), doctor_id: "0".into(), ..form };
        assert_eq!(field_of(validate_appointment(&form).unwrap_err()), "doctor_id");
    }

    #[test]
    fn appointment_date_required_and_iso() {
        let mut form = AppointmentForm {
            patient_id: "1".into(),
            doctor_id: "2".into(),
            appointment_date: "".into(),
            notes: Some("".into()),
        };
        assert_eq!(field_of(validate_appointment(&form).unwrap_err()), "appointment_date");

        form.appointment_date = "01/02/2024".into();
        assert_eq!(field_of(validate_appointment(&form).unwrap_err()), "appointment_date");

        form.appointment_date = "2024-02-29".into();
        let ok = validate_appointment(&form).unwrap();
        assert_eq!(ok.appointment_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(ok.notes, None);
    }

    #[test]
    fn appointment_date_rejects_signed_and_unpadded_years() {
        let mut form = AppointmentForm {
            patient_id: "1".into(),
            doctor_id: "2".into(),
            appointment_date: String::new(),
            notes: None,
        };
        for bad in ["+12345-01-01", "-0001-01-01", "+2024-01-01", "2024-1-5", "0999-1-01"] {
            form.appointment_date = bad.into();
            assert_eq!(
                field_of(validate_appointment(&form).unwrap_err()),
                "appointment_date",
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn calendar_date_round_trips_exactly() {
        assert_eq!(parse_calendar_date(" 2024-01-05 "), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(parse_calendar_date("0001-01-01"), NaiveDate::from_ymd_opt(1, 1, 1));
        assert_eq!(parse_calendar_date("9999-12-31"), NaiveDate::from_ymd_opt(9999, 12, 31));
        assert_eq!(parse_calendar_date("10000-01-01"), None);
        assert_eq!(parse_calendar_date("2023-02-29"), None);
    }
}
