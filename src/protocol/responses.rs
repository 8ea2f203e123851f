//! Sign-in response handling
//!
//! Defines the fixed response bodies returned by `/signIn`.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub const BINDING_ERROR: &str = "binding error";
pub const VALIDATION_ERROR: &str = "the input is not valid";
pub const INVALID_CREDENTIALS: &str = "wrong Name or Password or Phone Number";
pub const SIGNED_IN: &str = "Signed In Successfully";

/// Body of a successful sign-in
#[derive(Debug, Serialize)]
pub struct SignedIn<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    pub message: &'static str,
}

pub fn binding_error() -> Value {
    json!({ "error": BINDING_ERROR })
}

pub fn validation_error() -> Value {
    json!({ "validation_error": VALIDATION_ERROR })
}

pub fn invalid_credentials() -> Value {
    json!({ "error": INVALID_CREDENTIALS })
}

/// Build a compact JSON response
pub fn json_response(status: StatusCode, body: Value) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body.to_string(),
    )
        .into_response()
}

/// Build the `200` response for a signed-in user, indented with four spaces
pub fn signed_in(name: &str) -> Response {
    let body = SignedIn {
        name,
        message: SIGNED_IN,
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    if let Err(e) = body.serialize(&mut serializer) {
        log::warn!("Falling back to compact success body: {}", e);
        return json_response(StatusCode::OK, json!({ "Name": name, "message": SIGNED_IN }));
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        buf,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_bodies_use_expected_keys() {
        assert_eq!(binding_error()["error"], BINDING_ERROR);
        assert_eq!(validation_error()["validation_error"], VALIDATION_ERROR);
        assert_eq!(invalid_credentials()["error"], INVALID_CREDENTIALS);
    }

    #[test]
    fn success_body_names_the_user() {
        let body = serde_json::to_value(SignedIn {
            name: "Aryan",
            message: SIGNED_IN,
        })
        .unwrap();
        assert_eq!(body, json!({ "Name": "Aryan", "message": "Signed In Successfully" }));
    }

    #[test]
    fn success_response_is_ok() {
        let response = signed_in("Atharv");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert_eq!(content_type, JSON_CONTENT_TYPE);
    }
}
