//! Typed filters for the detailed time-entry report.
//!
//! The client sends filters as a plain field-to-value map. Only the four
//! recognized filter kinds are accepted; anything else is rejected instead
//! of being passed through to the query engine.

use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::scope::Selector;
use serde_json::{Map, Value};

/// One validated filter of the detailed report.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryFilter {
    /// Narrow to the projects of one or more customers.
    Customer(Selector),
    /// Match an entry state; the value `new` also matches entries without
    /// a state field.
    State(String),
    /// Match one calendar day, given in the user's configured date format.
    Date(String),
    /// Match an exact hours value. String input is coerced to a number.
    Hours(f64),
}

impl EntryFilter {
    /// Validates a raw filter map into typed filters.
    pub fn from_map(raw: &Map<String, Value>) -> Result<Vec<EntryFilter>> {
        let mut filters = Vec::new();
        for (field, value) in raw {
            let filter = match field.as_str() {
                "customer" => EntryFilter::Customer(
                    serde_json::from_value(value.clone())
                        .map_err(|_| Error::Validation(Message::InvalidCustomerFilter(value.to_string())))?,
                ),
                "state" => match value.as_str() {
                    Some(state) => EntryFilter::State(state.to_string()),
                    None => return Err(Error::Validation(Message::InvalidStateFilter(value.to_string()))),
                },
                "date" => match value.as_str() {
                    Some(date) => EntryFilter::Date(date.to_string()),
                    None => return Err(Error::Validation(Message::InvalidDateFilter(value.to_string()))),
                },
                "hours" => EntryFilter::Hours(coerce_hours(value)?),
                other => return Err(Error::Validation(Message::UnknownFilterField(other.to_string()))),
            };
            filters.push(filter);
        }
        Ok(filters)
    }
}

fn coerce_hours(value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| Error::Validation(Message::InvalidHoursFilter(value.to_string()))),
        Value::String(text) => text
            .parse()
            .map_err(|_| Error::Validation(Message::InvalidHoursFilter(text.clone()))),
        _ => Err(Error::Validation(Message::InvalidHoursFilter(value.to_string()))),
    }
}
