use serde_json::json;

use super::*;
use crate::net::types::User;

// =============================================================
// auth_header
// =============================================================

#[test]
fn auth_header_formats_token_scheme() {
    assert_eq!(auth_header(Some("abc")).as_deref(), Some("Token abc"));
}

#[test]
fn auth_header_skips_missing_or_blank_token() {
    assert_eq!(auth_header(None), None);
    assert_eq!(auth_header(Some("")), None);
    assert_eq!(auth_header(Some("  ")), None);
}

// =============================================================
// encode / decode
// =============================================================

#[test]
fn login_request_encodes_remember_me() {
    let req = LoginRequest { email: "a@b.co".to_owned(), password: "secret1".to_owned(), remember_me: true };
    let value = encode(&req).unwrap();
    assert_eq!(value, json!({ "email": "a@b.co", "password": "secret1", "rememberMe": true }));
}

#[test]
fn decode_reads_auth_response() {
    let body = json!({ "user": { "id": 5, "email": "a@b.co", "role": "user", "status": "active" }, "token": "t" });
    let resp: AuthResponse = decode(Some(body)).unwrap();
    assert_eq!(resp.user.id, "5");
}

#[test]
fn decode_without_body_is_error() {
    let err = decode::<User>(None).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_wrong_shape_is_error() {
    let err = decode::<AuthResponse>(Some(json!({ "ok": true }))).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_or_default_accepts_empty_body() {
    let info: InfoResponse = decode_or_default(None).unwrap();
    assert_eq!(info.info, None);
    let info: InfoResponse = decode_or_default(Some(json!({ "info": "Password updated" }))).unwrap();
    assert_eq!(info.info.as_deref(), Some("Password updated"));
}

// =============================================================
// Native builds
// =============================================================

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let cfg = ClientConfig::default();
    assert_eq!(block_on(fetch_current_user(&cfg)).unwrap_err(), ApiError::Unavailable);
    assert_eq!(block_on(logout(&cfg, Some("tok"))).unwrap_err(), ApiError::Unavailable);
    let req = ContactRequest::default();
    assert_eq!(block_on(send_contact_message(&cfg, &req)).unwrap_err(), ApiError::Unavailable);
}
