//! # Worklog - Timesheet Reporting Core
//!
//! The reporting and query-construction library of a timesheet web
//! application: users log hours against projects and tasks, and
//! administrators run aggregate reports over those entries.
//!
//! ## Features
//!
//! - **Report Builders**: total hours, daily hours, working time and
//!   detailed entry listings as aggregation pipelines or find queries
//! - **Project Scoping**: every report bounded to the projects its caller
//!   may see
//! - **Period Resolution**: named period tokens to concrete date ranges
//! - **Working Time Schedules**: per-day start/break/end reconstruction
//! - **Fuzzy Task Matching**: Levenshtein-based task name ranking
//! - **Authorization & Audit**: gate composition around handlers with
//!   optional transaction logging
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use worklog::db::projects::MemoryProjects;
//! use worklog::libs::scope::Selector;
//! use worklog::libs::settings::{MemorySettings, SettingsProvider};
//! use worklog::report::{ReportParams, ReportQueries};
//!
//! let projects = MemoryProjects::new();
//! let settings = MemorySettings::new();
//! let queries = ReportQueries::new(
//!     &projects,
//!     SettingsProvider::new(&settings),
//!     NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
//! );
//! let params = ReportParams {
//!     period: "this_week".to_string(),
//!     user_id: Selector::one("u1"),
//!     limit: 25,
//!     ..Default::default()
//! };
//! let pipeline = queries.daily_hours("u1", &params)?;
//! assert!(!pipeline.stages().is_empty());
//! # Ok::<(), worklog::libs::error::Error>(())
//! ```

pub mod db;
pub mod libs;
pub mod report;
