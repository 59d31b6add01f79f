use serde_json::json;

use super::*;

// =============================================================
// server_message
// =============================================================

#[test]
fn detail_field_wins() {
    let body = json!({ "detail": "Invalid credentials", "error": "ignored" });
    assert_eq!(server_message(&body).as_deref(), Some("Invalid credentials"));
}

#[test]
fn error_string_is_used() {
    assert_eq!(server_message(&json!({ "error": "Account locked" })).as_deref(), Some("Account locked"));
}

#[test]
fn error_array_is_joined() {
    let body = json!({ "error": ["Email taken", "Weak password"] });
    assert_eq!(server_message(&body).as_deref(), Some("Email taken, Weak password"));
}

#[test]
fn field_map_values_are_joined() {
    let body = json!({ "email": ["already registered"], "kra_pin": ["invalid"] });
    let msg = server_message(&body).unwrap();
    assert!(msg.contains("already registered"));
    assert!(msg.contains("invalid"));
}

#[test]
fn empty_or_non_text_bodies_yield_none() {
    assert_eq!(server_message(&json!({})), None);
    assert_eq!(server_message(&json!({ "detail": "  " })), None);
    assert_eq!(server_message(&json!(42)), None);
    assert_eq!(server_message(&json!({ "code": 7 })), None);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 400, message: Some("Bad email".to_owned()) };
    assert_eq!(err.user_message("Login failed. Please try again."), "Bad email");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn user_message_falls_back_to_generic() {
    let fallback = "Login failed. Please try again.";
    assert_eq!(ApiError::Status { status: 500, message: None }.user_message(fallback), fallback);
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 401, message: None };
    assert_eq!(err.to_string(), "request failed with status 401");
}
