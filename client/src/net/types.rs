//! Shared DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! The remote API is a separate service; these types mirror the JSON shapes
//! the client relies on and stay lenient where the server is known to vary
//! (numeric vs string ids, unknown roles and statuses).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An authenticated platform account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier. The API sends integers; strings are accepted too.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Authorization role.
    #[serde(default)]
    pub role: Role,
    /// Account lifecycle status.
    #[serde(default)]
    pub status: AccountStatus,
}

impl User {
    /// True when the record carries no identity at all (the wire form of `{}`).
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.email.is_empty()
    }
}

/// Authorization role attached to a user.
///
/// `admin` and `user` are the roles routes are declared against; any other
/// value is preserved so it can be compared and displayed verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    #[default]
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "user" => Self::User,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Account lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    #[default]
    Pending,
    Suspended,
    /// Any status this client does not know about. Never treated as active.
    #[serde(other)]
    Unknown,
}

/// Body of `POST login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

/// Successful login / current-user response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "User")]
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

/// Which side of a tender an account registers for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[default]
    Bidder,
    Tenderer,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bidder => "Bidder",
            Self::Tenderer => "Tenderer",
        }
    }
}

/// Body of `POST register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub user_type: UserType,
    pub company_name: String,
    pub email: String,
    pub contact_number: String,
    pub company_type: String,
    pub sector: String,
    pub kra_pin: String,
    pub location: String,
    pub industries: Vec<String>,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Body of `POST password/forgot/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST password/reset/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub otp: String,
}

/// Body of `POST activate/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivateRequest {
    pub token: String,
}

/// Body of `POST sendmail/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Optional informational payload returned by reset/activate endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InfoResponse {
    #[serde(default)]
    pub info: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::String(raw) => Ok(raw),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected number or string id")),
    }
}
