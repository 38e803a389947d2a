//! Appointment intake handlers.
//!
//! These handlers use the repository trait object for storage access, so the
//! same contract holds whichever backend is compiled in. Response messages
//! are part of the published API and must not drift.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use bookline_core::appointment::{
    Appointment, RegisterAppointment, RescheduleAppointment, VerifyAppointment,
};
use bookline_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Returned with HTTP 400 when any of the six required fields is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required. Please try again.";

/// Returned with HTTP 200 on a successful registration.
pub const REGISTERED_MESSAGE: &str = "Appointment registered successfully!";

/// Returned with HTTP 500 when the storage backend fails.
pub const DATABASE_ERROR_MESSAGE: &str = "Database Error";

/// Register a new appointment (POST /registerAppointment).
///
/// Validates that all six fields are present and non-empty, generates the
/// appointment id server-side, stamps the creation time, and issues a single
/// write to the backend.
pub async fn register_appointment(
    State(state): State<AppState>,
    payload: Result<Json<RegisterAppointment>, JsonRejection>,
) -> Response {
    // A body that does not parse carries no usable fields, so it gets the
    // same 400 as a payload with fields missing.
    let Ok(Json(payload)) = payload else {
        return missing_fields_response();
    };

    let missing = payload.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(missing = ?missing, "Rejected registration with missing fields");
        return missing_fields_response();
    }

    let appointment = Appointment::from_registration(payload);

    match state.appointments.create_appointment(&appointment).await {
        Ok(()) => {
            tracing::info!(appointment_id = %appointment.id, "Registered appointment");
            (
                StatusCode::OK,
                Json(json!({
                    "message": REGISTERED_MESSAGE,
                    "id": appointment.id,
                })),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to store appointment");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": DATABASE_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}

fn missing_fields_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": MISSING_FIELDS_MESSAGE })),
    )
        .into_response()
}

/// Check whether an appointment ID exists (POST /verify_appointment).
///
/// An unparseable ID is reported as `valid: false` rather than an error; the
/// caller asked a yes/no question about an identifier that cannot match.
pub async fn verify_appointment(
    State(state): State<AppState>,
    Json(payload): Json<VerifyAppointment>,
) -> Result<Json<Value>, Response> {
    if payload.appointment_number.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No appointment number provided." })),
        )
            .into_response());
    }

    let valid = match Uuid::parse_str(&payload.appointment_number) {
        Ok(id) => state
            .appointments
            .get_appointment(id)
            .await
            .map_err(|e| AppError::from(e).into_response())?
            .is_some(),
        Err(_) => false,
    };

    Ok(Json(json!({ "valid": valid })))
}

/// Get a single appointment by ID (GET /get_appointment/{id}).
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, Response> {
    let appointment = state
        .appointments
        .get_appointment(id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    match appointment {
        Some(appointment) => Ok(Json(appointment)),
        None => Err(not_found_response()),
    }
}

/// Update the date and time of an existing appointment (POST /update_appointment).
pub async fn update_appointment(
    State(state): State<AppState>,
    Json(payload): Json<RescheduleAppointment>,
) -> Result<Json<Value>, Response> {
    if payload.has_missing_fields() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Missing fields." })),
        )
            .into_response());
    }

    // An ID that is not a UUID cannot name a stored appointment.
    let id = Uuid::parse_str(&payload.id).map_err(|_| reschedule_not_found_response())?;

    match state
        .appointments
        .reschedule_appointment(id, &payload.new_date, &payload.new_time)
        .await
    {
        Ok(()) => {
            tracing::info!(appointment_id = %id, "Rescheduled appointment");
            Ok(Json(json!({ "success": true })))
        }
        Err(RepositoryError::NotFound { .. }) => Err(reschedule_not_found_response()),
        Err(err) => {
            tracing::error!(error = %err, "Failed to reschedule appointment");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": err.to_string() })),
            )
                .into_response())
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "No appointment found." })),
    )
        .into_response()
}

fn reschedule_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "No appointment found." })),
    )
        .into_response()
}
