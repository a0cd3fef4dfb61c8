//! Core library modules of the worklog reporting crate.
//!
//! Serves as the entry point for the building blocks the report layer is
//! composed of.
//!
//! ## Features
//!
//! - **Core Infrastructure**: settings lookup, messaging, error types
//! - **Report Building Blocks**: period resolution, project scoping
//! - **Derived Data**: working time schedules, fuzzy task matching
//! - **Call Wrapping**: authorization gates, audit logging
//!
//! ## Usage
//!
//! ```rust
//! use worklog::libs::period::PeriodResolver;
//! use chrono::{NaiveDate, Weekday};
//!
//! let resolver = PeriodResolver::new(Weekday::Mon);
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let range = resolver.resolve("this_week", today)?;
//! assert!(range.start <= range.end);
//! # Ok::<(), worklog::libs::error::Error>(())
//! ```

pub mod audit;
pub mod error;
pub mod guard;
pub mod messages;
pub mod period;
pub mod schedule;
pub mod scope;
pub mod settings;
pub mod similarity;
