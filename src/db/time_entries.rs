use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged unit of work.
///
/// `date` is a UTC-normalized calendar day; `hours` may be fractional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub project_id: String,
    pub task: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub user_id: String,
}

impl TimeEntry {
    /// Checks the entry before it is handed to the storage layer.
    ///
    /// Callers surface the message to the user and keep the rest of the
    /// batch; a bad entry never aborts a whole save.
    pub fn validate(&self) -> Result<()> {
        if self.task.trim().is_empty() {
            return Err(Error::Validation(Message::EmptyTaskName));
        }
        if self.hours < 0.0 {
            return Err(Error::Validation(Message::NegativeHours));
        }
        Ok(())
    }
}

/// Collapses duplicate entries within one save batch.
///
/// Entries sharing (project, task, date, user) are merged by adding their
/// hours, so saving the same task twice on a day updates the total instead
/// of creating a second document. Order of first appearance is kept.
pub fn merge_batch(entries: Vec<TimeEntry>) -> Vec<TimeEntry> {
    let mut merged: Vec<TimeEntry> = Vec::new();
    for entry in entries {
        match merged.iter_mut().find(|existing| {
            existing.project_id == entry.project_id
                && existing.task == entry.task
                && existing.date == entry.date
                && existing.user_id == entry.user_id
        }) {
            Some(existing) => existing.hours += entry.hours,
            None => merged.push(entry),
        }
    }
    merged
}
