//! Report query builders.
//!
//! Administrators run four reports over the logged time entries: total
//! hours per period, daily hours, working time and the detailed entry
//! listing. Each builder translates a [`ReportParams`] bundle into the
//! query shape the document store executes, an aggregation [`Pipeline`]
//! or a [`FindSpec`], and nothing else: no report here touches the store
//! or produces rows itself.
//!
//! All four builders share the same scoping rules:
//!
//! - **Projects**: resolved through the customer selection when one is
//!   given, otherwise through the project selection; always limited to
//!   what the requesting user may see.
//! - **Dates**: `custom` uses the explicit range, `all` (or no period)
//!   omits the date clause, every other token goes through the
//!   [`PeriodResolver`](crate::libs::period::PeriodResolver).
//! - **Users**: `all` omits the user clause, otherwise exact or
//!   set-membership match.
//! - **Pagination**: `skip = (page - 1) * limit`; a limit of 0 means
//!   unbounded and emits no limit stage.

pub mod daily_hours;
pub mod filters;
pub mod pipeline;
pub mod time_entries;
pub mod total_hours;
pub mod working_time;

use crate::db::projects::ProjectStore;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::period::{DateRange, PeriodResolver};
use crate::libs::scope::{ProjectScopeResolver, Selector};
use crate::libs::settings::SettingsProvider;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Requested result order: a column index and a direction token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub column: Option<i64>,
    pub order: Option<String>,
}

/// The transient parameter bundle of one report request.
///
/// Deserializes from the client's JSON shape; consumed once per call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportParams {
    /// Project selection; ignored when a customer selection is present.
    pub project_id: Selector,
    /// Customer selection; takes precedence over `project_id` unless "all".
    pub customer: Selector,
    /// Named period token, `custom`, or `all`/empty for no date bound.
    pub period: String,
    /// Explicit range, used only when `period` is `custom`.
    pub dates: Option<DateRange>,
    pub user_id: Selector,
    /// Free-text task search.
    pub search: Option<String>,
    /// Raw filter map, validated by the detailed builder.
    pub filters: Option<Map<String, Value>>,
    pub sort: Option<SortSpec>,
    /// 0 means unbounded.
    pub limit: u32,
    /// 1-based.
    pub page: Option<u32>,
}

impl ReportParams {
    fn has_named_period(&self) -> bool {
        !matches!(self.period.as_str(), "" | "all" | "custom")
    }
}

/// The four report builders, bound to one request's collaborators.
///
/// `today` is the reference day periods resolve against; passing it in
/// keeps every builder a pure function of its inputs.
pub struct ReportQueries<'a> {
    pub(super) scope: ProjectScopeResolver<'a>,
    pub(super) settings: SettingsProvider<'a>,
    pub(super) today: NaiveDate,
}

impl<'a> ReportQueries<'a> {
    pub fn new(projects: &'a dyn ProjectStore, settings: SettingsProvider<'a>, today: NaiveDate) -> Self {
        ReportQueries {
            scope: ProjectScopeResolver::new(projects),
            settings,
            today,
        }
    }

    /// The authorized project-id scope for this request.
    pub(super) fn project_scope(&self, viewer: &str, params: &ReportParams) -> Result<Vec<String>> {
        if !params.customer.is_all() {
            self.scope.by_customer(viewer, &params.customer)
        } else {
            self.scope.by_project_ids(viewer, &params.project_id)
        }
    }

    /// The date bound of this request, if it has one.
    pub(super) fn date_range(&self, viewer: &str, params: &ReportParams) -> Result<Option<DateRange>> {
        if params.period == "custom" {
            return params
                .dates
                .ok_or(Error::Validation(Message::MissingCustomDates))
                .map(Some);
        }
        if params.has_named_period() {
            let resolver = PeriodResolver::new(self.settings.start_of_week(Some(viewer)));
            return resolver.resolve(&params.period, self.today).map(Some);
        }
        Ok(None)
    }

    /// The match document shared by every builder: project scope, date
    /// bound, user clause.
    pub(super) fn base_match(&self, viewer: &str, params: &ReportParams) -> Result<Map<String, Value>> {
        let mut query = Map::new();
        query.insert("projectId".to_string(), json!({ "$in": self.project_scope(viewer, params)? }));
        if let Some(range) = self.date_range(viewer, params)? {
            query.insert("date".to_string(), json!({ "$gte": range.start, "$lte": range.end }));
        }
        match &params.user_id {
            Selector::All => {}
            Selector::One(id) => {
                query.insert("userId".to_string(), json!(id));
            }
            Selector::Many(ids) => {
                query.insert("userId".to_string(), json!({ "$in": ids }));
            }
        }
        Ok(query)
    }
}
