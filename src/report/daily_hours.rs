use super::pipeline::{skip_for, Pipeline};
use super::{ReportParams, ReportQueries};
use crate::libs::error::Result;
use serde_json::json;

impl<'a> ReportQueries<'a> {
    /// Aggregation for the daily-hours report: one row per (user, project,
    /// day) with the summed hours, newest day first.
    pub fn daily_hours(&self, viewer: &str, params: &ReportParams) -> Result<Pipeline> {
        let matcher = self.base_match(viewer, params)?;
        let mut pipeline = Pipeline::new()
            .match_on(matcher.into())
            .group(json!({
                "_id": { "userId": "$userId", "projectId": "$projectId", "date": "$date" },
                "totalHours": { "$sum": "$hours" },
            }))
            .sort(json!({ "date": -1 }))
            .skip(skip_for(params.page, params.limit));
        if params.limit > 0 {
            pipeline = pipeline.limit(params.limit as u64);
        }
        Ok(pipeline)
    }
}
