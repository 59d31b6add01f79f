//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so settings are baked in at
//! compile time from `TENDERHUB_API_URL`, `TENDERHUB_PERSIST_SESSION` and
//! `TENDERHUB_RESTORE_SERVER_SESSION`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1.0/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote API, always ending in `/`.
    pub api_base_url: String,
    /// Keep the signed-in session in local storage across reloads.
    pub persist_session: bool,
    /// Ask the API for a cookie session (`GET login/`) on startup.
    pub restore_server_session: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ClientConfig {
    /// Configuration captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TENDERHUB_API_URL"),
            option_env!("TENDERHUB_PERSIST_SESSION"),
            option_env!("TENDERHUB_RESTORE_SERVER_SESSION"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        persist_session: Option<&str>,
        restore_server_session: Option<&str>,
    ) -> Self {
        let api_base_url = normalize_base_url(api_url.filter(|u| !u.trim().is_empty()).unwrap_or(DEFAULT_API_URL));
        let persist_session = persist_session.is_some_and(parse_flag);
        let restore_server_session = restore_server_session.is_some_and(parse_flag);
        Self { api_base_url, persist_session, restore_server_session }
    }

    /// Join an endpoint path (e.g. `"login/"`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    format!("{}/", raw.trim().trim_end_matches('/'))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
