//! HTTP routes
//!
//! Wires `/signIn` to its handler. The handler runs the three stages in
//! order: binding, field validation, membership.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum::routing::post;
use axum::{Router, middleware};
use log::info;

use crate::error::SignInError;
use crate::middleware::logging::log_request;
use crate::protocol::{parse_sign_in, responses};
use crate::server::state::AppState;

pub const SIGN_IN_PATH: &str = "/signIn";

/// Build the application router around the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(SIGN_IN_PATH, post(sign_in))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn sign_in(State(state): State<AppState>, body: Bytes) -> Result<Response, SignInError> {
    let record = parse_sign_in(&body, &state.validator)?;
    state.validator.validate(&record)?;
    state.known_users.check(&record)?;

    info!("User signed in: {}", record.name);
    Ok(responses::signed_in(&record.name))
}
