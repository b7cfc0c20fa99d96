//! Doctor endpoints.
//!
//! - `GET /api/doctors?q=&spec=` — filtered listing plus specialization choices
//! - `POST /api/doctors` — create
//! - `GET|PUT|DELETE /api/doctors/:id`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::endpoints::path_id;
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, DoctorQuery, IdResponse};
use crate::db::{Doctors, Repository};
use crate::listing::{self, DoctorListing};
use crate::models::{Doctor, DoctorForm, EntityKind};
use crate::records::{self, ClinicError};

pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<DoctorQuery>,
) -> Result<Json<DoctorListing>, ApiError> {
    let conn = ctx.core.open_db()?;
    let listing = listing::list_doctors(&conn, &query.into())?;
    Ok(Json(listing))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<Doctor>, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    let doctor = Doctors::get(&conn, id)?.ok_or(ClinicError::NotFound {
        entity: EntityKind::Doctor,
        id,
    })?;
    Ok(Json(doctor))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(form): Json<DoctorForm>,
) -> Result<(StatusCode, Json<IdResponse>), ApiError> {
    let conn = ctx.core.open_db()?;
    let id = records::create_doctor(&conn, &form)?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    Json(form): Json<DoctorForm>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    records::update_doctor(&conn, id, &form)?;
    Ok(Json(IdResponse { id }))
}

/// 409 while any appointment still references the doctor.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    records::delete_doctor(&conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
