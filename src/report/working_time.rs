use super::pipeline::{skip_for, Pipeline};
use super::{ReportParams, ReportQueries};
use crate::libs::error::Result;
use serde_json::json;

impl<'a> ReportQueries<'a> {
    /// Aggregation for the working-time report: one row per (user, day)
    /// with the summed hours as `totalTime`. Each result row is fed
    /// through [`map_schedule`](crate::libs::schedule::map_schedule) to
    /// derive the day's schedule.
    pub fn working_time(&self, viewer: &str, params: &ReportParams) -> Result<Pipeline> {
        let matcher = self.base_match(viewer, params)?;
        let mut pipeline = Pipeline::new()
            .match_on(matcher.into())
            .group(json!({
                "_id": { "userId": "$userId", "date": "$date" },
                "totalTime": { "$sum": "$hours" },
            }))
            // The skip stage runs before the sort here; page boundaries
            // follow the engine's pre-sort order.
            .skip(skip_for(params.page, params.limit))
            .sort(json!({ "date": -1 }));
        if params.limit > 0 {
            pipeline = pipeline.limit(params.limit as u64);
        }
        Ok(pipeline)
    }
}
