use super::*;
use crate::util::forms::{RESET_MISMATCH, RESET_PASSWORD_WEAK};

#[test]
fn reset_request_carries_link_code_as_otp() {
    let req = reset_request("Str0ng!pw", "Str0ng!pw", " 839201 ").unwrap();
    assert_eq!(req.otp, "839201");
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, serde_json::json!({ "password": "Str0ng!pw", "confirmPassword": "Str0ng!pw", "otp": "839201" }));
}

#[test]
fn reset_request_rejects_weak_password() {
    let errors = reset_request("allowercase1", "allowercase1", "x").unwrap_err();
    assert_eq!(errors.get("password"), Some(RESET_PASSWORD_WEAK));
}

#[test]
fn reset_request_rejects_mismatch() {
    let errors = reset_request("Str0ng!pw", "Str0ng!px", "x").unwrap_err();
    assert_eq!(errors.get("confirm_password"), Some(RESET_MISMATCH));
}
