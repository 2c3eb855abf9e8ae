//! Attendance clock-in/out and history.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::AttendanceRecord;

/// Today's clock state as shown by the attendance widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockStatus {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

impl ClockStatus {
    pub fn of(record: Option<&AttendanceRecord>) -> Self {
        match record {
            None => Self::NotCheckedIn,
            Some(r) if r.clock_out_time.as_deref().is_some_and(|t| !t.is_empty()) => Self::CheckedOut,
            Some(_) => Self::CheckedIn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotCheckedIn => "Not Checked In",
            Self::CheckedIn => "Checked In",
            Self::CheckedOut => "Checked Out",
        }
    }

    pub fn can_clock_in(self) -> bool {
        self == Self::NotCheckedIn
    }

    pub fn can_clock_out(self) -> bool {
        self == Self::CheckedIn
    }
}

/// A clock button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    pub fn success_message(self) -> &'static str {
        match self {
            Self::In => "Successfully clocked in!",
            Self::Out => "Successfully clocked out!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::In => "Failed to clock in",
            Self::Out => "Failed to clock out",
        }
    }
}

/// Run `action` against the backend.
///
/// # Errors
///
/// Transport and HTTP errors from [`ApiClient`].
pub async fn clock(client: &ApiClient, action: ClockAction) -> Result<(), ApiError> {
    match action {
        ClockAction::In => clock_in(client).await,
        ClockAction::Out => clock_out(client).await,
    }
}

/// The record dated `today` (`YYYY-MM-DD`), if any.
pub fn today_record<'a>(history: &'a [AttendanceRecord], today: &str) -> Option<&'a AttendanceRecord> {
    history.iter().find(|r| r.date == today)
}

/// Time-of-day part of an ISO 8601 timestamp, trimmed to `HH:MM`.
pub fn time_of_day(timestamp: &str) -> &str {
    let time = timestamp.split_once('T').map_or(timestamp, |(_, t)| t);
    time.get(..5).unwrap_or(time)
}

/// `POST /api/attendance/clock-in`.
///
/// # Errors
///
/// Transport and HTTP errors from [`ApiClient`].
pub async fn clock_in(client: &ApiClient) -> Result<(), ApiError> {
    client.post_empty("/api/attendance/clock-in").await
}

/// `POST /api/attendance/clock-out`.
///
/// # Errors
///
/// Transport and HTTP errors from [`ApiClient`].
pub async fn clock_out(client: &ApiClient) -> Result<(), ApiError> {
    client.post_empty("/api/attendance/clock-out").await
}

/// `GET /api/attendance/me`. A `null` body is an empty history.
///
/// # Errors
///
/// Transport, HTTP and decode errors from [`ApiClient`].
pub async fn attendance_history(client: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    let records: Option<Vec<AttendanceRecord>> = client.get_json("/api/attendance/me").await?;
    Ok(records.unwrap_or_default())
}

/// Today's date in the browser's UTC calendar as `YYYY-MM-DD`.
pub fn today_utc() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
