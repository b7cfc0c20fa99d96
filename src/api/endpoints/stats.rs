//! Dashboard statistics endpoints.
//!
//! - `GET /api/stats` — all three groupings at once
//! - `GET /api/stats/patients_by_city`
//! - `GET /api/stats/doctors_by_spec`
//! - `GET /api/stats/appointments_over_time`

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::stats::{self, CityCount, DashboardStats, DateCount, SpecializationCount};

pub async fn dashboard(State(ctx): State<ApiContext>) -> Result<Json<DashboardStats>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(stats::dashboard_stats(&conn)?))
}

pub async fn patients_by_city(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<CityCount>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(stats::patients_by_city(&conn)?))
}

pub async fn doctors_by_spec(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<SpecializationCount>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(stats::doctors_by_specialization(&conn)?))
}

/// Oldest day first.
pub async fn appointments_over_time(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<DateCount>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(stats::appointments_by_date(&conn)?))
}
