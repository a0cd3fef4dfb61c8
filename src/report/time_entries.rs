//! The detailed time-entry listing.
//!
//! Unlike the aggregations, this report is a direct find: a query document
//! plus sort/skip/limit options. On top of the shared scoping it supports
//! a free-text task search (escaped before it reaches the engine's regex
//! matcher) and the validated filter set from [`super::filters`].

use super::filters::EntryFilter;
use super::pipeline::{skip_for, FindOptions, FindSpec};
use super::{ReportParams, ReportQueries, SortSpec};
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use chrono::{NaiveDate, NaiveTime};
use serde_json::{json, Map, Value};

/// Maps the listing's sortable column indexes to field names.
fn sort_field(column: Option<i64>) -> &'static str {
    match column {
        Some(0) => "projectId",
        Some(2) => "task",
        Some(3) => "userId",
        Some(4) => "hours",
        _ => "date",
    }
}

/// Only `asc` sorts ascending; anything else is descending.
fn sort_direction(order: Option<&str>) -> i64 {
    match order {
        Some("asc") => 1,
        _ => -1,
    }
}

impl<'a> ReportQueries<'a> {
    /// Find-shape query for the detailed time-entry listing.
    pub fn time_entries(&self, viewer: &str, params: &ReportParams) -> Result<FindSpec> {
        let mut base = self.base_match(viewer, params)?;
        if let Some(search) = params.search.as_deref().filter(|text| !text.is_empty()) {
            base.insert(
                "task".to_string(),
                json!({ "$regex": regex::escape(search), "$options": "i" }),
            );
        }

        let query = match &params.filters {
            Some(raw) => {
                let filters = EntryFilter::from_map(raw)?;
                let clauses = self.filter_clauses(viewer, &filters)?;
                json!({ "$and": [Value::Object(base), Value::Object(clauses)] })
            }
            None => Value::Object(base),
        };

        let default_sort = SortSpec::default();
        let sort = params.sort.as_ref().unwrap_or(&default_sort);
        let mut sort_doc = Map::new();
        sort_doc.insert(
            sort_field(sort.column).to_string(),
            json!(sort_direction(sort.order.as_deref())),
        );

        Ok(FindSpec {
            query,
            options: FindOptions {
                sort: Value::Object(sort_doc),
                skip: skip_for(params.page, params.limit),
                limit: (params.limit > 0).then(|| params.limit as u64),
            },
        })
    }

    /// Translates validated filters into query clauses.
    fn filter_clauses(&self, viewer: &str, filters: &[EntryFilter]) -> Result<Map<String, Value>> {
        let mut clauses = Map::new();
        for filter in filters {
            match filter {
                EntryFilter::Customer(customers) => {
                    let ids = self.scope.by_customer(viewer, customers)?;
                    clauses.insert("projectId".to_string(), json!({ "$in": ids }));
                }
                EntryFilter::State(state) if state == "new" => {
                    // Entries saved before states existed have no state
                    // field at all.
                    clauses.insert(
                        "$or".to_string(),
                        json!([{ "state": { "$exists": false } }, { "state": "new" }]),
                    );
                }
                EntryFilter::State(state) => {
                    clauses.insert("state".to_string(), json!(state));
                }
                EntryFilter::Date(raw) => {
                    let format = self.settings.date_format(Some(viewer));
                    let day = NaiveDate::parse_from_str(raw, &format)
                        .map_err(|_| Error::Validation(Message::InvalidDateFilter(raw.clone())))?;
                    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
                    clauses.insert(
                        "date".to_string(),
                        json!({
                            "$gte": day.and_time(NaiveTime::MIN),
                            "$lte": day.and_time(end_of_day),
                        }),
                    );
                }
                EntryFilter::Hours(hours) => {
                    clauses.insert("hours".to_string(), json!(hours));
                }
            }
        }
        Ok(clauses)
    }
}
