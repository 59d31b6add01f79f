use super::*;
use crate::util::forms::{INVALID_EMAIL, LOGIN_PASSWORD_TOO_SHORT};

#[test]
fn login_request_trims_email_and_keeps_password() {
    let req = login_request("  steve@nene.com ", " secret1", true).unwrap();
    assert_eq!(req.email, "steve@nene.com");
    assert_eq!(req.password, " secret1");
    assert!(req.remember_me);
}

#[test]
fn login_request_reports_every_invalid_field() {
    let errors = login_request("not-an-email", "123", false).unwrap_err();
    assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    assert_eq!(errors.get("password"), Some(LOGIN_PASSWORD_TOO_SHORT));
    assert_eq!(errors.len(), 2);
}

#[test]
fn login_request_body_serializes_remember_flag() {
    let req = login_request("a@b.co", "hunter22", false).unwrap();
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.co", "password": "hunter22", "rememberMe": false }));
}
