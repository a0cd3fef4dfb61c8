//! Project scope resolution for reports.
//!
//! Every report is bounded to the set of projects its requesting user may
//! see. The scope is resolved either from an explicit project selection or
//! from a customer selection; in both cases the owner/public/team
//! visibility predicate and the archived exclusion are applied on top, so
//! naming a foreign project id never widens the scope.

use crate::db::projects::{ProjectSelector, ProjectStore};
use crate::libs::error::Result;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// A request-side selection: everything, one id, or a list of ids.
///
/// Deserializes from the wire forms the client sends: the sentinel string
/// `"all"`, a single id string, or an array of ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    One(String),
    Many(Vec<String>),
}

impl Selector {
    pub fn one(id: impl Into<String>) -> Self {
        Selector::One(id.into())
    }

    pub fn many<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector::Many(ids.into_iter().map(Into::into).collect())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// The selected ids; empty for `All`.
    pub fn to_ids(&self) -> Vec<String> {
        match self {
            Selector::All => Vec::new(),
            Selector::One(id) => vec![id.clone()],
            Selector::Many(ids) => ids.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(id) if id == "all" => Selector::All,
            Raw::One(id) => Selector::One(id),
            Raw::Many(ids) => Selector::Many(ids),
        })
    }
}

/// Resolves request selections into authorized project-id sets.
pub struct ProjectScopeResolver<'a> {
    store: &'a dyn ProjectStore,
}

impl<'a> ProjectScopeResolver<'a> {
    pub fn new(store: &'a dyn ProjectStore) -> Self {
        ProjectScopeResolver { store }
    }

    /// Project ids visible to `viewer`, optionally narrowed to a selection.
    ///
    /// An unknown or unauthorized id simply drops out of the result; an
    /// empty scope is a normal outcome, never an error.
    pub fn by_project_ids(&self, viewer: &str, selection: &Selector) -> Result<Vec<String>> {
        let mut selector = ProjectSelector::visible_to(viewer);
        if !selection.is_all() {
            selector = selector.with_ids(selection.to_ids());
        }
        self.find_ids(selector)
    }

    /// Project ids visible to `viewer`, narrowed to one or more customers.
    ///
    /// The visibility predicate applies regardless of the customer
    /// selection.
    pub fn by_customer(&self, viewer: &str, customers: &Selector) -> Result<Vec<String>> {
        let mut selector = ProjectSelector::visible_to(viewer);
        if !customers.is_all() {
            selector = selector.with_customers(customers.to_ids());
        }
        self.find_ids(selector)
    }

    fn find_ids(&self, selector: ProjectSelector) -> Result<Vec<String>> {
        let ids: Vec<String> = self
            .store
            .find(&selector)?
            .into_iter()
            .map(|project| project.id)
            .collect();
        debug!(count = ids.len(), "resolved project scope");
        Ok(ids)
    }
}
