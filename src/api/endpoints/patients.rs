//! Patient endpoints.
//!
//! - `GET /api/patients?q=&city=` — filtered listing plus city choices
//! - `POST /api/patients` — create
//! - `GET|PUT|DELETE /api/patients/:id`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::endpoints::path_id;
use crate::api::error::ApiError;
use crate::api::types::{ApiContext, IdResponse, PatientQuery};
use crate::db::{Patients, Repository};
use crate::listing::{self, PatientListing};
use crate::models::{EntityKind, Patient, PatientForm};
use crate::records::{self, ClinicError};

pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<PatientQuery>,
) -> Result<Json<PatientListing>, ApiError> {
    let conn = ctx.core.open_db()?;
    let listing = listing::list_patients(&conn, &query.into())?;
    Ok(Json(listing))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    let patient = Patients::get(&conn, id)?.ok_or(ClinicError::NotFound {
        entity: EntityKind::Patient,
        id,
    })?;
    Ok(Json(patient))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    Json(form): Json<PatientForm>,
) -> Result<(StatusCode, Json<IdResponse>), ApiError> {
    let conn = ctx.core.open_db()?;
    let id = records::create_patient(&conn, &form)?;
    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
    Json(form): Json<PatientForm>,
) -> Result<Json<IdResponse>, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    records::update_patient(&conn, id, &form)?;
    Ok(Json(IdResponse { id }))
}

/// 409 while any appointment still references the patient.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(&raw_id)?;
    let conn = ctx.core.open_db()?;
    records::delete_patient(&conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}
