//! # Error Handling
//!
//! Three layers of errors, innermost first:
//!
//! - [`PlatformError`] and [`StoreError`]: what the authenticator and the
//!   key-value storage can raise.
//! - [`CeremonyError`]: what a registration or sign-in attempt can end in.
//! - [`AppError`]: the HTTP boundary. Every ceremony failure collapses into
//!   one generic alert per ceremony; the detailed cause only goes to the log.
//!
//! No error outlives the ceremony invocation that raised it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Alert shown when sign-in is attempted before any registration
pub const NO_REGISTERED_CREDENTIAL: &str = "No registered credential found.";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const SIGN_IN_FAILED: &str = "Sign-in failed";

/// Failures raised by the platform authenticator
///
/// Cancellation, timeout, unsupported hardware and security errors all land
/// in `Ceremony`; the variant text is diagnostic only.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Authenticator rejected the ceremony: {0}")]
    Ceremony(String),

    /// Request or response could not be carried across the JSON shape
    #[error("Could not translate ceremony data: {0}")]
    Translation(#[from] serde_json::Error),

    /// The blocking authenticator task died
    #[error("Authenticator task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Authenticator unavailable: {0}")]
    Unavailable(String),
}

/// Failures raised by the local key-value storage
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The stored credential identifier is not valid base64
    #[error("Stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// How a single ceremony attempt can end unsuccessfully
#[derive(Error, Debug)]
pub enum CeremonyError {
    /// Sign-in was attempted with nothing stored; the platform was not called
    #[error("No registered credential")]
    NoRegisteredCredential,

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application-wide error type, converted into an HTTP response
#[derive(Error, Debug)]
pub enum AppError {
    /// Precondition failure for sign-in (404)
    #[error("No registered credential found.")]
    NoRegisteredCredential,

    #[error("Registration failed: {0}")]
    Registration(#[source] CeremonyError),

    #[error("Sign-in failed: {0}")]
    SignIn(#[source] CeremonyError),
}

impl AppError {
    pub fn registration(err: CeremonyError) -> Self {
        AppError::Registration(err)
    }

    /// The missing-credential precondition keeps its own alert
    pub fn sign_in(err: CeremonyError) -> Self {
        match err {
            CeremonyError::NoRegisteredCredential => AppError::NoRegisteredCredential,
            other => AppError::SignIn(other),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NoRegisteredCredential => StatusCode::NOT_FOUND,
            AppError::Registration(cause) | AppError::SignIn(cause) => match cause {
                CeremonyError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// Alert text for the page; never includes the underlying cause
    pub fn alert(&self) -> &'static str {
        match self {
            AppError::NoRegisteredCredential => NO_REGISTERED_CREDENTIAL,
            AppError::Registration(_) => REGISTRATION_FAILED,
            AppError::SignIn(_) => SIGN_IN_FAILED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NoRegisteredCredential => tracing::info!("{}", self),
            _ => tracing::error!("{:?}", self),
        }

        let body = Json(json!({
            "error": self.alert(),
        }));

        (self.status(), body).into_response()
    }
}

/// Convenience type alias for handler results
pub type AppResult<T> = Result<T, AppError>;
