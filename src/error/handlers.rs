//! Error handlers
//!
//! Maps sign-in failures onto their fixed HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, info};

use crate::error::types::SignInError;
use crate::protocol::responses;

/// Log a sign-in failure at a level matching its kind
pub fn handle_error(err: &SignInError) {
    match err {
        SignInError::Binding(_) | SignInError::Validation(_) => debug!("Sign-in rejected: {}", err),
        SignInError::Auth(_) => info!("Sign-in refused: {}", err),
    }
}

/// Convert error to HTTP status code
pub fn error_to_status(err: &SignInError) -> StatusCode {
    match err {
        SignInError::Binding(_) => StatusCode::BAD_REQUEST,
        SignInError::Validation(_) => StatusCode::BAD_REQUEST,
        SignInError::Auth(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for SignInError {
    fn into_response(self) -> Response {
        handle_error(&self);

        let body = match &self {
            SignInError::Binding(_) => responses::binding_error(),
            SignInError::Validation(_) => responses::validation_error(),
            SignInError::Auth(_) => responses::invalid_credentials(),
        };

        responses::json_response(error_to_status(&self), body)
    }
}
