//! Project documents and the visibility rules applied to every lookup.
//!
//! A project is visible to a user when the user owns it, when it is marked
//! public, or when the user is on its team. Archived projects are excluded
//! unless a caller explicitly opts in. [`ProjectSelector`] carries that
//! predicate as data so the storage layer can translate it into whatever
//! query its engine needs, while [`ProjectSelector::matches`] is the
//! reference semantics the in-memory adapter (and the tests) run against.

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub team: Vec<String>,
    // Absent counts as not archived.
    #[serde(default)]
    pub archived: Option<bool>,
}

impl Project {
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }
}

/// The visibility predicate for project lookups.
#[derive(Debug, Clone, Default)]
pub struct ProjectSelector {
    /// The requesting user; owner, public and team checks run against this id.
    pub viewer: String,
    /// Restrict to these project ids, on top of the visibility checks.
    pub ids: Option<Vec<String>>,
    /// Restrict to projects of these customers.
    pub customers: Option<Vec<String>>,
    /// Include archived projects.
    pub include_archived: bool,
}

impl ProjectSelector {
    pub fn visible_to(viewer: &str) -> Self {
        ProjectSelector {
            viewer: viewer.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_customers(mut self, customers: Vec<String>) -> Self {
        self.customers = Some(customers);
        self
    }

    pub fn including_archived(mut self) -> Self {
        self.include_archived = true;
        self
    }

    /// Whether a project satisfies this selector.
    ///
    /// Naming a project id does not bypass the visibility checks: an id
    /// restriction only ever narrows the visible set.
    pub fn matches(&self, project: &Project) -> bool {
        if !self.include_archived && project.is_archived() {
            return false;
        }
        let visible = project.user_id == self.viewer
            || project.public
            || project.team.iter().any(|member| member == &self.viewer);
        if !visible {
            return false;
        }
        if let Some(ids) = &self.ids {
            if !ids.iter().any(|id| id == &project.id) {
                return false;
            }
        }
        if let Some(customers) = &self.customers {
            match &project.customer {
                Some(customer) => {
                    if !customers.iter().any(|c| c == customer) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Project lookup provided by the storage layer.
pub trait ProjectStore {
    fn find(&self, selector: &ProjectSelector) -> Result<Vec<Project>>;
}

/// In-memory project collection for tests and demo setups.
#[derive(Default)]
pub struct MemoryProjects {
    projects: Vec<Project>,
}

impl MemoryProjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, project: Project) {
        self.projects.push(project);
    }
}

impl ProjectStore for MemoryProjects {
    fn find(&self, selector: &ProjectSelector) -> Result<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|project| selector.matches(project))
            .cloned()
            .collect())
    }
}
