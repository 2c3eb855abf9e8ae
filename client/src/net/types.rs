//! REST DTOs for the HR backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Identifiers the backend
//! may send as numbers are accepted as either numbers or strings where the
//! client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Current user's identity as shown in the header and profile page.
///
/// Comes either from `GET /api/auth/me` or from the bearer token's claims.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// User identifier (numeric ids are stringified).
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Role label, e.g. `"Employee"` or `"ADMIN"`.
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Relative or absolute image path; see `util::image_url`.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// ISO 8601 timestamp of account creation, if provided.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// First letters of the first two words, uppercased. Empty for a blank name.
pub fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn default_role() -> String {
    "Employee".to_owned()
}

impl UserIdentity {
    /// Up to two uppercase initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        let initials = name_initials(&self.name);
        if initials.is_empty() { "U".to_owned() } else { initials }
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` response. The token may be missing on a
/// misconfigured backend; callers treat that as a failed login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnLeave,
    HalfDay,
    #[serde(other)]
    Unknown,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
            Self::OnLeave => "ON_LEAVE",
            Self::HalfDay => "HALF_DAY",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// One day of attendance from `GET /api/attendance/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// ISO 8601 timestamp.
    pub clock_in_time: String,
    #[serde(default)]
    pub clock_out_time: Option<String>,
    pub status: AttendanceStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    #[default]
    FullDay,
    HalfDay,
}

impl LeaveType {
    /// Wire value, also used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullDay => "FULL_DAY",
            Self::HalfDay => "HALF_DAY",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "FULL_DAY" => Some(Self::FullDay),
            "HALF_DAY" => Some(Self::HalfDay),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// `POST /api/leave/apply` body, produced only by form validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// A submitted leave request from `GET /api/leave/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i64,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub reason: String,
    pub start_date: String,
    pub end_date: String,
    pub status: LeaveStatus,
}

/// Directory entry from `GET /api/employees/FetchEmployeeList`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub employee_id_number: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `POST /api/employees/AddEmployee` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub employee_id_number: String,
    pub department: String,
    pub designation: String,
    pub salary: Option<f64>,
    pub shift: String,
}

/// Response of `AddEmployee`; only the id is needed for the image upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedEmployee {
    #[serde(default)]
    pub id: Option<i64>,
}

impl CreatedEmployee {
    /// Read the id from a success body. Empty, non-JSON and id-less bodies
    /// all mean the employee exists but no upload target is known.
    pub fn from_body(body: &[u8]) -> Self {
        let id = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| match value.get("id")? {
                serde_json::Value::Number(n) => n.as_i64(),
                serde_json::Value::String(s) => s.trim().parse().ok(),
                _ => None,
            });
        Self { id }
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
