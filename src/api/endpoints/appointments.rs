//! Appointment endpoints.
//!
//! - `GET /api/appointments?doctor_id=&patient_id=&start=&end=` — filtered
//!   listing with derived status and patient/doctor choices
//! - `GET /api/appointments/choices` — patients and doctors for entry forms
//! - `POST /api/appointments` — create
//! - `GET|PUT|DELETE /api/appointments/:id`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::endpoints::path_id;
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, AppointmentQuery, IdResponse};
use crate::db;
use crate::listing::{self, AppointmentFormChoices, AppointmentListing};
use crate::models::{AppointmentFilter, AppointmentForm, AppointmentRow, EntityKind};
use crate::records::{self, ClinicError};

pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<AppointmentListing>, ApiError> {
    let filter = AppointmentFilter::try_from(query)?;
    let conn = ctx.core.open_db()?;
    let listing = listing::list_appointments(&conn, &filter, ctx.core.today())?;
    Ok(Json(listing))
}

pub async fn choices(
    State(ctx): State<ApiContext>,
) -> Result<Json<AppointmentFormChoices>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(listing::appointment_form_choices(&conn)?))
}

/// Joined view: includes patient and doctor names and the status for today.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<AppointmentRow>, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    let row = db::get_appointment_row(&conn, id, ctx.core.today())?.ok_or(
        ClinicError::NotFound {
            entity: EntityKind::Appointment,
            id,
        },
    )?;
    Ok(Json(row))
}

/// 409 when the patient or doctor does not exist.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(form): Json<AppointmentForm>,
) -> Result<(StatusCode, Json<IdResponse>), ApiError> {
    let conn = ctx.core.open_db()?;
    let id = records::create_appointment(&conn, &form)?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    Json(form): Json<AppointmentForm>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    records::update_appointment(&conn, id, &form)?;
    Ok(Json(IdResponse { id }))
}

pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    records::delete_appointment(&conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
