use serde::Serialize;
use serde_json::{json, Value};

/// An ordered sequence of aggregation stages for the document store.
///
/// Stages are plain JSON documents using the engine's literal operator and
/// field names; this type only keeps their construction in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<Value>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fields(mut self, fields: Value) -> Self {
        self.stages.push(json!({ "$addFields": fields }));
        self
    }

    pub fn match_on(mut self, query: Value) -> Self {
        self.stages.push(json!({ "$match": query }));
        self
    }

    pub fn group(mut self, spec: Value) -> Self {
        self.stages.push(json!({ "$group": spec }));
        self
    }

    pub fn sort(mut self, spec: Value) -> Self {
        self.stages.push(json!({ "$sort": spec }));
        self
    }

    pub fn skip(mut self, count: u64) -> Self {
        self.stages.push(json!({ "$skip": count }));
        self
    }

    pub fn limit(mut self, count: u64) -> Self {
        self.stages.push(json!({ "$limit": count }));
        self
    }

    pub fn stages(&self) -> &[Value] {
        &self.stages
    }

    pub fn into_stages(self) -> Vec<Value> {
        self.stages
    }
}

/// Options accompanying a find-shape query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindOptions {
    /// Mapping of field name to sort direction (1 or -1).
    pub sort: Value,
    pub skip: u64,
    /// Absent means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// A direct (non-aggregation) query plus its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindSpec {
    pub query: Value,
    pub options: FindOptions,
}

/// Documents to skip for a 1-based page.
pub fn skip_for(page: Option<u32>, limit: u32) -> u64 {
    match page {
        Some(page) if page > 0 => (page as u64 - 1) * limit as u64,
        _ => 0,
    }
}
