//! Leave requests.

#[cfg(test)]
#[path = "leave_test.rs"]
mod leave_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{LeaveApplication, LeaveRequest, LeaveType};

const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// Raw leave form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub leave_type: Option<LeaveType>,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveForm {
    /// Check required fields and date order.
    ///
    /// Dates are `YYYY-MM-DD` from `<input type="date">`, so string order is
    /// calendar order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on the first problem found.
    pub fn validate(&self) -> Result<LeaveApplication, ApiError> {
        let start_date = self.start_date.trim();
        let end_date = self.end_date.trim();
        let reason = self.reason.trim();
        let Some(leave_type) = self.leave_type else {
            return Err(ApiError::Validation(FILL_ALL_FIELDS.to_owned()));
        };
        if start_date.is_empty() || end_date.is_empty() || reason.is_empty() {
            return Err(ApiError::Validation(FILL_ALL_FIELDS.to_owned()));
        }
        if end_date < start_date {
            return Err(ApiError::Validation("End date cannot be before start date".to_owned()));
        }
        Ok(LeaveApplication {
            leave_type,
            start_date: start_date.to_owned(),
            end_date: end_date.to_owned(),
            reason: reason.to_owned(),
        })
    }
}

/// Validate `form` and `POST /api/leave/apply`. Invalid forms never hit the
/// network.
///
/// # Errors
///
/// Validation, transport and HTTP errors from [`ApiClient`].
pub async fn apply_leave(client: &ApiClient, form: &LeaveForm) -> Result<(), ApiError> {
    let body = form.validate()?;
    client.post_json_unit("/api/leave/apply", &body).await
}

/// `GET /api/leave/me`. A `null` body is an empty history.
///
/// # Errors
///
/// Transport, HTTP and decode errors from [`ApiClient`].
pub async fn leave_history(client: &ApiClient) -> Result<Vec<LeaveRequest>, ApiError> {
    let requests: Option<Vec<LeaveRequest>> = client.get_json("/api/leave/me").await?;
    Ok(requests.unwrap_or_default())
}
