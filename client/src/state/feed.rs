//! Fetched-list state for attendance, leave and employee views.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::error::ApiError;

/// A list loaded from the backend, with its load progress.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> FeedState<T> {
    /// Mark a (re)load as started. Existing items stay visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a load result. On failure the previous items are kept and
    /// `fallback` is used unless the server supplied a message.
    pub fn settle(&mut self, result: Result<Vec<T>, ApiError>, fallback: &str) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                log::error!("{fallback}: {err}");
                self.error = Some(err.user_message(fallback));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}
