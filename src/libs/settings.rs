//! Configuration lookup for the reporting core.
//!
//! The timesheet application keeps its configuration as a flat key/value
//! store: a global document maintained by administrators plus optional
//! per-user overrides. This module wraps that store behind a single
//! [`SettingsProvider`] with a fixed precedence chain, so no component ever
//! reads ambient global state.
//!
//! ## Precedence
//!
//! Every lookup resolves in this order:
//!
//! 1. **User override**: the requesting user's personal setting
//! 2. **Global value**: the administrator-maintained default
//! 3. **Hard-coded fallback**: the compiled-in default listed below
//!
//! ## Keys
//!
//! | Key | Type | Fallback |
//! |-----|------|----------|
//! | `startOfWeek` | number (0 = Sunday .. 6 = Saturday) | 1 (Monday) |
//! | `timeunit` | text (`h`, `d`, `m`) | `h` |
//! | `hoursToDays` | number | 8 |
//! | `weekviewDateFormat` | text (chrono format) | `%a, %d.%m.` |
//! | `dateformat` | text (chrono format) | `%d.%m.%Y` |
//! | `dailyStartTime` | text (`HH:MM`) | `09:00` |
//! | `breakStartTime` | text (`HH:MM`) | `12:00` |
//! | `breakDuration` | number (hours) | 0.5 |
//! | `regularWorkingTime` | number (hours) | 8 |
//! | `addBreakToWorkingTime` | bool | false |
//! | `enableTransactions` | bool | false |
//!
//! A stored value with the wrong type or an unparseable time falls back to
//! the compiled-in default; the provider never fails a lookup.
//!
//! ## Usage
//!
//! ```rust
//! use worklog::libs::settings::{MemorySettings, SettingKey, SettingValue, SettingsProvider};
//!
//! let mut store = MemorySettings::new();
//! store.set_global(SettingKey::RegularWorkingTime, SettingValue::Number(7.5));
//! let settings = SettingsProvider::new(&store);
//! assert_eq!(settings.regular_working_time(None), 7.5);
//! ```

use chrono::{NaiveTime, Weekday};
use std::collections::HashMap;

/// The configuration keys known to the reporting core.
///
/// `as_str` returns the wire name used by the settings store, which keeps
/// the camelCase names the rest of the application already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    StartOfWeek,
    Timeunit,
    HoursToDays,
    WeekviewDateFormat,
    Dateformat,
    DailyStartTime,
    BreakStartTime,
    BreakDuration,
    RegularWorkingTime,
    AddBreakToWorkingTime,
    EnableTransactions,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::StartOfWeek => "startOfWeek",
            SettingKey::Timeunit => "timeunit",
            SettingKey::HoursToDays => "hoursToDays",
            SettingKey::WeekviewDateFormat => "weekviewDateFormat",
            SettingKey::Dateformat => "dateformat",
            SettingKey::DailyStartTime => "dailyStartTime",
            SettingKey::BreakStartTime => "breakStartTime",
            SettingKey::BreakDuration => "breakDuration",
            SettingKey::RegularWorkingTime => "regularWorkingTime",
            SettingKey::AddBreakToWorkingTime => "addBreakToWorkingTime",
            SettingKey::EnableTransactions => "enableTransactions",
        }
    }
}

/// A scalar configuration value as stored by the settings document.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SettingValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Read-only access to the stored configuration.
///
/// The real application backs this with its settings collection; tests use
/// [`MemorySettings`].
pub trait SettingsSource {
    /// The global value for a key, if one is stored.
    fn global(&self, key: SettingKey) -> Option<SettingValue>;

    /// The per-user override for a key, if one is stored.
    fn user(&self, user_id: &str, key: SettingKey) -> Option<SettingValue>;
}

/// Settings lookup applying the user override, global, fallback precedence.
#[derive(Clone, Copy)]
pub struct SettingsProvider<'a> {
    source: &'a dyn SettingsSource,
}

impl<'a> SettingsProvider<'a> {
    pub fn new(source: &'a dyn SettingsSource) -> Self {
        SettingsProvider { source }
    }

    /// Raw lookup following the precedence chain, ending at the hard-coded
    /// fallback for the key.
    pub fn get(&self, user_id: Option<&str>, key: SettingKey) -> SettingValue {
        if let Some(user_id) = user_id {
            if let Some(value) = self.source.user(user_id, key) {
                return value;
            }
        }
        if let Some(value) = self.source.global(key) {
            return value;
        }
        default_for(key)
    }

    /// First weekday of the week for the given user.
    pub fn start_of_week(&self, user_id: Option<&str>) -> Weekday {
        let index = self.number_or_default(user_id, SettingKey::StartOfWeek);
        match index as i64 {
            0 => Weekday::Sun,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Mon,
        }
    }

    /// Date format (chrono syntax) used when parsing report filter values.
    pub fn date_format(&self, user_id: Option<&str>) -> String {
        self.text_or_default(user_id, SettingKey::Dateformat)
    }

    pub fn weekview_date_format(&self, user_id: Option<&str>) -> String {
        self.text_or_default(user_id, SettingKey::WeekviewDateFormat)
    }

    pub fn time_unit(&self, user_id: Option<&str>) -> String {
        self.text_or_default(user_id, SettingKey::Timeunit)
    }

    pub fn hours_to_days(&self, user_id: Option<&str>) -> f64 {
        self.number_or_default(user_id, SettingKey::HoursToDays)
    }

    /// Time the user's workday nominally starts.
    pub fn daily_start_time(&self, user_id: Option<&str>) -> NaiveTime {
        self.time_or_default(user_id, SettingKey::DailyStartTime)
    }

    /// Time the user's break nominally starts.
    pub fn break_start_time(&self, user_id: Option<&str>) -> NaiveTime {
        self.time_or_default(user_id, SettingKey::BreakStartTime)
    }

    /// Break length in hours.
    pub fn break_duration(&self, user_id: Option<&str>) -> f64 {
        self.number_or_default(user_id, SettingKey::BreakDuration)
    }

    /// Contracted daily working time in hours.
    pub fn regular_working_time(&self, user_id: Option<&str>) -> f64 {
        self.number_or_default(user_id, SettingKey::RegularWorkingTime)
    }

    /// Whether the break is appended to the derived end of day.
    pub fn add_break_to_working_time(&self) -> bool {
        self.bool_or_default(None, SettingKey::AddBreakToWorkingTime)
    }

    /// Whether invoked operations are recorded as audit transactions.
    pub fn transactions_enabled(&self) -> bool {
        self.bool_or_default(None, SettingKey::EnableTransactions)
    }

    fn bool_or_default(&self, user_id: Option<&str>, key: SettingKey) -> bool {
        self.get(user_id, key)
            .as_bool()
            .or_else(|| default_for(key).as_bool())
            .unwrap_or(false)
    }

    fn number_or_default(&self, user_id: Option<&str>, key: SettingKey) -> f64 {
        self.get(user_id, key)
            .as_number()
            .or_else(|| default_for(key).as_number())
            .unwrap_or(0.0)
    }

    fn text_or_default(&self, user_id: Option<&str>, key: SettingKey) -> String {
        match self.get(user_id, key) {
            SettingValue::Text(value) => value,
            _ => default_for(key).as_text().unwrap_or_default().to_string(),
        }
    }

    fn time_or_default(&self, user_id: Option<&str>, key: SettingKey) -> NaiveTime {
        let raw = self.text_or_default(user_id, key);
        NaiveTime::parse_from_str(&raw, "%H:%M").unwrap_or_else(|_| {
            let fallback = default_for(key).as_text().unwrap_or("00:00").to_string();
            NaiveTime::parse_from_str(&fallback, "%H:%M").unwrap_or_else(|_| NaiveTime::MIN)
        })
    }
}

/// Compiled-in fallback for each key, the end of the precedence chain.
pub fn default_for(key: SettingKey) -> SettingValue {
    match key {
        SettingKey::StartOfWeek => SettingValue::Number(1.0),
        SettingKey::Timeunit => SettingValue::Text("h".to_string()),
        SettingKey::HoursToDays => SettingValue::Number(8.0),
        SettingKey::WeekviewDateFormat => SettingValue::Text("%a, %d.%m.".to_string()),
        SettingKey::Dateformat => SettingValue::Text("%d.%m.%Y".to_string()),
        SettingKey::DailyStartTime => SettingValue::Text("09:00".to_string()),
        SettingKey::BreakStartTime => SettingValue::Text("12:00".to_string()),
        SettingKey::BreakDuration => SettingValue::Number(0.5),
        SettingKey::RegularWorkingTime => SettingValue::Number(8.0),
        SettingKey::AddBreakToWorkingTime => SettingValue::Bool(false),
        SettingKey::EnableTransactions => SettingValue::Bool(false),
    }
}

/// In-memory settings store for tests and demo setups.
#[derive(Default)]
pub struct MemorySettings {
    global: HashMap<SettingKey, SettingValue>,
    user: HashMap<(String, SettingKey), SettingValue>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_global(&mut self, key: SettingKey, value: SettingValue) {
        self.global.insert(key, value);
    }

    pub fn set_user(&mut self, user_id: &str, key: SettingKey, value: SettingValue) {
        self.user.insert((user_id.to_string(), key), value);
    }
}

impl SettingsSource for MemorySettings {
    fn global(&self, key: SettingKey) -> Option<SettingValue> {
        self.global.get(&key).cloned()
    }

    fn user(&self, user_id: &str, key: SettingKey) -> Option<SettingValue> {
        self.user.get(&(user_id.to_string(), key)).cloned()
    }
}
