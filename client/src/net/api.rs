//! REST calls to the remote tender API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Non-2xx responses carry
//! the server's message when the error body had one, so pages can show it
//! and otherwise fall back to the `*_FAILED` texts below.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    ActivateRequest, AuthResponse, ContactRequest, ForgotPasswordRequest, InfoResponse, LoginRequest,
    RegisterRequest, ResetPasswordRequest,
};
use crate::config::ClientConfig;

pub const LOGIN_PATH: &str = "login/";
pub const REGISTER_PATH: &str = "register/";
pub const FORGOT_PASSWORD_PATH: &str = "password/forgot/";
pub const RESET_PASSWORD_PATH: &str = "password/reset/";
pub const ACTIVATE_PATH: &str = "activate/";
pub const LOGOUT_PATH: &str = "logouts";
pub const CONTACT_PATH: &str = "sendmail/";

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const FORGOT_FAILED: &str = "Failed to send reset password";
pub const RESET_FAILED: &str = "Failed to reset password. Please try again.";
pub const ACTIVATE_FAILED: &str = "Account activation failed. The link may have expired.";
pub const CONTACT_FAILED: &str = "Failed to send message. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Delete,
}

/// `Authorization` header value for `token`, if there is one to send.
fn auth_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty()).map(|t| format!("Token {t}"))
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::Decode("empty response body".to_owned()))?;
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Like [`decode`] but an absent body yields `T::default()`.
fn decode_or_default<T: DeserializeOwned + Default>(body: Option<Value>) -> Result<T, ApiError> {
    match body {
        None => Ok(T::default()),
        some => decode(some),
    }
}

/// Perform one request and return the parsed JSON body, if any.
async fn call(
    cfg: &ClientConfig,
    verb: Verb,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Result<Option<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::RequestBuilder;

        let url = cfg.endpoint(path);
        let mut builder = match verb {
            Verb::Get => RequestBuilder::new(&url).method(gloo_net::http::Method::GET),
            Verb::Post => RequestBuilder::new(&url).method(gloo_net::http::Method::POST),
            Verb::Delete => RequestBuilder::new(&url).method(gloo_net::http::Method::DELETE),
        }
        .credentials(web_sys::RequestCredentials::Include);
        if let Some(value) = auth_header(token) {
            builder = builder.header("Authorization", &value);
        }

        let sent = match body {
            Some(body) => builder.json(&body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<Value>(&text).ok();
        if !resp.ok() {
            let message = parsed.as_ref().and_then(super::error::server_message);
            log::warn!("{verb:?} {path} failed with status {status}");
            return Err(ApiError::Status { status, message });
        }
        Ok(parsed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, verb, path, body, token);
        Err(ApiError::Unavailable)
    }
}

/// Sign in via `POST login/`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response does not contain a user.
pub async fn login(cfg: &ClientConfig, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let body = call(cfg, Verb::Post, LOGIN_PATH, Some(encode(req)?), None).await?;
    decode(body)
}

/// Ask the API who owns the current cookie session via `GET login/`.
///
/// # Errors
///
/// Returns an error if the request fails or nobody is signed in.
pub async fn fetch_current_user(cfg: &ClientConfig) -> Result<AuthResponse, ApiError> {
    let body = call(cfg, Verb::Get, LOGIN_PATH, None, None).await?;
    decode(body)
}

/// Create an account via `POST register/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the form.
pub async fn register(cfg: &ClientConfig, req: &RegisterRequest) -> Result<(), ApiError> {
    call(cfg, Verb::Post, REGISTER_PATH, Some(encode(req)?), None).await?;
    Ok(())
}

/// Request a password-reset link via `POST password/forgot/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses it.
pub async fn request_password_reset(cfg: &ClientConfig, req: &ForgotPasswordRequest) -> Result<(), ApiError> {
    call(cfg, Verb::Post, FORGOT_PASSWORD_PATH, Some(encode(req)?), None).await?;
    Ok(())
}

/// Set a new password with a reset token via `POST password/reset/`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn reset_password(cfg: &ClientConfig, req: &ResetPasswordRequest) -> Result<InfoResponse, ApiError> {
    let body = call(cfg, Verb::Post, RESET_PASSWORD_PATH, Some(encode(req)?), None).await?;
    decode_or_default(body)
}

/// Activate an account from its emailed token via `POST activate/`.
///
/// # Errors
///
/// Returns an error if the request fails or the token is rejected.
pub async fn activate_account(cfg: &ClientConfig, req: &ActivateRequest) -> Result<InfoResponse, ApiError> {
    let body = call(cfg, Verb::Post, ACTIVATE_PATH, Some(encode(req)?), None).await?;
    decode_or_default(body)
}

/// Tell the server the session ended via `DELETE logouts`.
///
/// # Errors
///
/// Returns an error if the request fails; callers treat this as non-fatal.
pub async fn logout(cfg: &ClientConfig, token: Option<&str>) -> Result<(), ApiError> {
    call(cfg, Verb::Delete, LOGOUT_PATH, None, token).await?;
    Ok(())
}

/// Submit the public contact form via `POST sendmail/`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the message.
pub async fn send_contact_message(cfg: &ClientConfig, req: &ContactRequest) -> Result<(), ApiError> {
    call(cfg, Verb::Post, CONTACT_PATH, Some(encode(req)?), None).await?;
    Ok(())
}
