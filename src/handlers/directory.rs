use axum::{extract::Query, Extension, Json};
use serde::Deserialize;

use super::{ApiResult, ApiState, AuthToken};
use crate::domain::models::{Appointment, Diagnosis, Doctor};

#[derive(Debug, Default, Deserialize)]
pub struct DoctorsQuery {
    #[serde(default)]
    pub specialty: Option<String>,
}

/// GET /api/doctors?specialty=
/// Public directory, no cookie needed
pub async fn list_doctors_handler(
    Extension(state): Extension<ApiState>,
    Query(params): Query<DoctorsQuery>,
) -> ApiResult<Json<Vec<Doctor>>> {
    let specialty = params.specialty.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let doctors = state.backend.list_doctors(specialty).await?;
    Ok(Json(doctors))
}

/// GET /api/diagnoses
pub async fn list_diagnoses_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Json<Vec<Diagnosis>>> {
    let mut diagnoses = state.backend.list_diagnoses(&token).await?;
    diagnoses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(diagnoses))
}

/// GET /api/appointments
pub async fn list_appointments_handler(
    Extension(state): Extension<ApiState>,
    AuthToken(token): AuthToken,
) -> ApiResult<Json<Vec<Appointment>>> {
    let mut appointments = state.backend.list_appointments(&token).await?;
    appointments.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
    Ok(Json(appointments))
}
