//! # Ceremony Handlers
//!
//! One handler per button on the page, plus the capability probe the page
//! runs when it loads. Every response carries the alert text to show.

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::webauthn::capability::BLUETOOTH_UNAVAILABLE;
use crate::webauthn::{authentication, registration};
use axum::{extract::State, Json};
use rand::rngs::OsRng;
use serde_json::{json, Value};

/// "Register" button
///
/// ## Route
/// POST /api/register
pub async fn register(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let registered = registration::register(
        &state.requests,
        state.platform.as_ref(),
        state.store.as_ref(),
        &mut OsRng,
    )
    .await
    .map_err(AppError::registration)?;

    Ok(Json(json!({
        "success": true,
        "message": "Registration successful",
        "credential_id": registered.stored_as
    })))
}

/// "Sign In" button
///
/// ## Route
/// POST /api/sign-in
pub async fn sign_in(State(state): State<AppState>) -> AppResult<Json<Value>> {
    authentication::sign_in(
        &state.requests,
        state.platform.as_ref(),
        state.store.as_ref(),
        &mut OsRng,
    )
    .await
    .map_err(AppError::sign_in)?;

    Ok(Json(json!({
        "success": true,
        "message": "Sign-in successful"
    })))
}

/// Capability probe
///
/// ## Route
/// GET /api/capability
///
/// Never fails; an unavailable capability only produces a warning.
pub async fn capability(State(state): State<AppState>) -> Json<Value> {
    let available = state.probe.is_available().await;
    if !available {
        tracing::warn!("{}", BLUETOOTH_UNAVAILABLE);
    }

    Json(json!({
        "available": available,
        "message": (!available).then_some(BLUETOOTH_UNAVAILABLE)
    }))
}
