//! Reconstruction of daily work schedules from aggregated totals.
//!
//! The working time report stores only how many hours a user logged per
//! day. For the schedule view the application derives a plausible workday
//! from that total and the user's configured day: nominal start time, the
//! break window, the resulting end of day, and the delta against the
//! contracted working time.

use crate::db::users::UserStore;
use crate::libs::settings::SettingsProvider;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One aggregated working-time row: total hours a user logged on a day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub user_id: String,
    pub date: NaiveDate,
    pub total_time: f64,
}

/// A derived per-day schedule. All times are `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    pub date: NaiveDate,
    pub resource: String,
    pub start_time: String,
    pub break_start_time: Option<String>,
    pub break_end_time: Option<String>,
    pub end_time: String,
    pub total_time: f64,
    pub regular_working_time: f64,
    pub regular_working_time_difference: f64,
}

/// Derives the schedule for one aggregated day.
///
/// The end of day is the configured start plus the logged hours, plus the
/// break length when `addBreakToWorkingTime` is set. The break window only
/// appears when the derived end of day lies after the configured break
/// start; a short day that ends earlier has no break fields. Identical
/// inputs always produce identical output.
pub fn map_schedule(total: &DailyTotal, users: &dyn UserStore, settings: &SettingsProvider<'_>) -> WorkSchedule {
    let user = Some(total.user_id.as_str());
    let start = settings.daily_start_time(user);
    let break_start = settings.break_start_time(user);
    let break_duration = settings.break_duration(user);
    let regular_working_time = settings.regular_working_time(user);

    let mut worked = hours_to_duration(total.total_time);
    if settings.add_break_to_working_time() {
        worked = worked + hours_to_duration(break_duration);
    }
    // Clock time only; an end wrapping past midnight compares as early morning.
    let end = start + worked;

    let (break_start_time, break_end_time) = if end > break_start {
        (
            Some(format_time(break_start)),
            Some(format_time(break_start + hours_to_duration(break_duration))),
        )
    } else {
        (None, None)
    };

    let resource = users
        .user(&total.user_id)
        .map(|user| user.name().to_string())
        .unwrap_or_else(|| total.user_id.clone());

    WorkSchedule {
        date: total.date,
        resource,
        start_time: format_time(start),
        break_start_time,
        break_end_time,
        end_time: format_time(end),
        total_time: total.total_time,
        regular_working_time,
        regular_working_time_difference: total.total_time - regular_working_time,
    }
}

fn hours_to_duration(hours: f64) -> Duration {
    Duration::seconds((hours * 3600.0).round() as i64)
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
