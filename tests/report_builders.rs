#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use worklog::db::projects::{MemoryProjects, Project};
    use worklog::libs::error::Error;
    use worklog::libs::period::DateRange;
    use worklog::libs::scope::Selector;
    use worklog::libs::settings::{MemorySettings, SettingsProvider};
    use worklog::report::{ReportParams, ReportQueries};

    fn projects() -> MemoryProjects {
        let mut store = MemoryProjects::new();
        store.insert(Project {
            id: "p1".to_string(),
            name: "Internal".to_string(),
            color: None,
            customer: None,
            user_id: "u1".to_string(),
            public: false,
            team: Vec::new(),
            archived: None,
        });
        store.insert(Project {
            id: "p2".to_string(),
            name: "Website".to_string(),
            color: None,
            customer: Some("c1".to_string()),
            user_id: "u2".to_string(),
            public: true,
            team: Vec::new(),
            archived: None,
        });
        store
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn stage_keys(stages: &[Value]) -> Vec<&str> {
        stages
            .iter()
            .map(|stage| stage.as_object().unwrap().keys().next().unwrap().as_str())
            .collect()
    }

    fn skip_value(stages: &[Value]) -> Value {
        stages
            .iter()
            .find_map(|stage| stage.get("$skip"))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_total_hours_pipeline_shape() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_month".to_string(),
            user_id: Selector::one("u1"),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.total_hours("u1", &params).unwrap();
        let stages = pipeline.stages();
        assert_eq!(stage_keys(stages), vec!["$addFields", "$match", "$group", "$sort", "$skip", "$limit"]);

        // Hours are cast to decimals before anything matches on them.
        assert_eq!(stages[0]["$addFields"]["hours"], json!({ "$toDecimal": "$hours" }));

        let matcher = &stages[1]["$match"];
        assert_eq!(matcher["projectId"], json!({ "$in": ["p1", "p2"] }));
        assert_eq!(matcher["date"], json!({ "$gte": "2026-08-01", "$lte": "2026-08-31" }));
        assert_eq!(matcher["userId"], json!("u1"));

        assert_eq!(
            stages[2]["$group"],
            json!({
                "_id": { "userId": "$userId", "projectId": "$projectId" },
                "totalHours": { "$sum": "$hours" },
            })
        );
        assert_eq!(stages[3]["$sort"], json!({ "date": -1 }));
        assert_eq!(stages[5]["$limit"], json!(25));
    }

    #[test]
    fn test_daily_hours_groups_per_day() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_week".to_string(),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        let stages = pipeline.stages();
        assert_eq!(stage_keys(stages), vec!["$match", "$group", "$sort", "$skip", "$limit"]);
        assert_eq!(
            stages[1]["$group"]["_id"],
            json!({ "userId": "$userId", "projectId": "$projectId", "date": "$date" })
        );
        assert_eq!(stages[2]["$sort"], json!({ "date": -1 }));
    }

    #[test]
    fn test_working_time_applies_skip_before_sort() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_month".to_string(),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.working_time("u1", &params).unwrap();
        let stages = pipeline.stages();
        assert_eq!(stage_keys(stages), vec!["$match", "$group", "$skip", "$sort", "$limit"]);
        assert_eq!(
            stages[1]["$group"],
            json!({
                "_id": { "userId": "$userId", "date": "$date" },
                "totalTime": { "$sum": "$hours" },
            })
        );
    }

    #[test]
    fn test_pagination_skips_previous_pages() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_month".to_string(),
            limit: 10,
            page: Some(2),
            ..Default::default()
        };

        let total = queries.total_hours("u1", &params).unwrap();
        let daily = queries.daily_hours("u1", &params).unwrap();
        let working = queries.working_time("u1", &params).unwrap();
        assert_eq!(skip_value(total.stages()), json!(10));
        assert_eq!(skip_value(daily.stages()), json!(10));
        assert_eq!(skip_value(working.stages()), json!(10));

        let detailed = queries.time_entries("u1", &params).unwrap();
        assert_eq!(detailed.options.skip, 10);
    }

    #[test]
    fn test_zero_limit_means_unbounded() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_month".to_string(),
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        assert!(!stage_keys(pipeline.stages()).contains(&"$limit"));
    }

    #[test]
    fn test_all_period_omits_the_date_clause() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "all".to_string(),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        assert!(pipeline.stages()[0]["$match"].get("date").is_none());
    }

    #[test]
    fn test_all_users_omits_the_user_clause() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_month".to_string(),
            user_id: Selector::All,
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        assert!(pipeline.stages()[0]["$match"].get("userId").is_none());
    }

    #[test]
    fn test_user_list_matches_by_membership() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "this_month".to_string(),
            user_id: Selector::many(["u1", "u2"]),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        assert_eq!(pipeline.stages()[0]["$match"]["userId"], json!({ "$in": ["u1", "u2"] }));
    }

    #[test]
    fn test_custom_period_uses_the_supplied_dates() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "custom".to_string(),
            dates: Some(DateRange {
                start: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
                end: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
            }),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        assert_eq!(
            pipeline.stages()[0]["$match"]["date"],
            json!({ "$gte": "2026-07-15", "$lte": "2026-07-20" })
        );
    }

    #[test]
    fn test_custom_period_without_dates_fails() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "custom".to_string(),
            ..Default::default()
        };

        let err = queries.daily_hours("u1", &params).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.message_key(), Some("period.missing_custom_dates"));
    }

    #[test]
    fn test_customer_selection_takes_precedence() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            project_id: Selector::one("p1"),
            customer: Selector::one("c1"),
            period: "this_month".to_string(),
            limit: 25,
            ..Default::default()
        };

        let pipeline = queries.daily_hours("u1", &params).unwrap();
        assert_eq!(pipeline.stages()[0]["$match"]["projectId"], json!({ "$in": ["p2"] }));
    }

    #[test]
    fn test_unknown_period_token_propagates() {
        let store = projects();
        let settings = MemorySettings::new();
        let queries = ReportQueries::new(&store, SettingsProvider::new(&settings), today());
        let params = ReportParams {
            period: "fortnight".to_string(),
            ..Default::default()
        };

        let err = queries.total_hours("u1", &params).unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod(_)));
    }

    #[test]
    fn test_report_params_deserialize_from_client_json() {
        let params: ReportParams = serde_json::from_value(json!({
            "projectId": "all",
            "customer": ["c1", "c2"],
            "period": "custom",
            "dates": { "startDate": "2026-07-01", "endDate": "2026-07-31" },
            "userId": "u1",
            "search": "review",
            "sort": { "column": 4, "order": "asc" },
            "limit": 50,
            "page": 3,
        }))
        .unwrap();

        assert_eq!(params.project_id, Selector::All);
        assert_eq!(params.customer, Selector::many(["c1", "c2"]));
        assert_eq!(params.dates.unwrap().start, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        assert_eq!(params.user_id, Selector::one("u1"));
        assert_eq!(params.limit, 50);
        assert_eq!(params.page, Some(3));
    }
}
