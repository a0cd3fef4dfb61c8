//! Display implementation for worklog messages.
//!
//! Converts structured `Message` values into their default English text.
//! Callers that need localized output should resolve `Message::key()`
//! against their own locale catalog instead of using this rendering.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === AUTHORIZATION MESSAGES ===
            Message::NotAuthenticated => "You have to be signed in to use this function".to_string(),
            Message::AccountInactive => "This account has been deactivated".to_string(),
            Message::AdminRequired => "You have to be an administrator to use this function".to_string(),

            // === PERIOD MESSAGES ===
            Message::UnknownPeriod(token) => format!("Unknown report period '{}'", token),
            Message::MissingCustomDates => "A custom period needs explicit start and end dates".to_string(),

            // === TIME ENTRY MESSAGES ===
            Message::EmptyTaskName => "A time entry needs a task name".to_string(),
            Message::NegativeHours => "Logged hours can not be negative".to_string(),

            // === REPORT FILTER MESSAGES ===
            Message::UnknownFilterField(field) => format!("Unknown report filter '{}'", field),
            Message::InvalidCustomerFilter(value) => format!("'{}' is not a valid customer filter", value),
            Message::InvalidStateFilter(value) => format!("'{}' is not a valid state filter", value),
            Message::InvalidHoursFilter(value) => format!("'{}' is not a valid hours filter", value),
            Message::InvalidDateFilter(value) => format!("'{}' is not a valid date filter", value),

            // === AUDIT MESSAGES ===
            Message::TransactionLogFailed(reason) => format!("Failed to record transaction: {}", reason),
        };
        write!(f, "{}", text)
    }
}
