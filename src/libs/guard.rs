//! Authorization gates around operation handlers.
//!
//! Handlers never check permissions themselves. A [`GuardedMethod`] carries
//! an ordered list of gates that run before the handler body; the first
//! failing gate aborts the call with an [`Error::Auth`] and the handler is
//! never invoked, so a rejected call has no side effects. Audit logging,
//! when attached, runs after the gates and before the handler.

use crate::db::users::{UserRecord, UserStore};
use crate::libs::audit::AuditLogger;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use serde_json::Value;

/// Fails unless the actor names a known, active account.
pub fn require_authenticated(users: &dyn UserStore, actor: Option<&str>) -> Result<UserRecord> {
    let id = actor.ok_or(Error::Auth(Message::NotAuthenticated))?;
    let user = users.user(id).ok_or(Error::Auth(Message::NotAuthenticated))?;
    if user.inactive {
        return Err(Error::Auth(Message::AccountInactive));
    }
    Ok(user)
}

/// Fails unless the actor is a known, active administrator.
pub fn require_admin(users: &dyn UserStore, actor: Option<&str>) -> Result<UserRecord> {
    let user = require_authenticated(users, actor)?;
    if !user.is_admin {
        return Err(Error::Auth(Message::AdminRequired));
    }
    Ok(user)
}

/// A pre-call check applied before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Authenticated,
    Admin,
}

/// An operation wrapped in its gates and optional audit logging.
pub struct GuardedMethod<'a> {
    name: &'a str,
    gates: &'a [Gate],
    users: &'a dyn UserStore,
    audit: Option<&'a AuditLogger<'a>>,
}

impl<'a> GuardedMethod<'a> {
    pub fn new(name: &'a str, gates: &'a [Gate], users: &'a dyn UserStore) -> Self {
        GuardedMethod {
            name,
            gates,
            users,
            audit: None,
        }
    }

    pub fn with_audit(mut self, audit: &'a AuditLogger<'a>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Runs the gates in order, then audit logging, then the handler.
    ///
    /// The handler receives the resolved caller when a gate looked it up.
    pub fn call<T, F>(&self, actor: Option<&str>, args: &Value, handler: F) -> Result<T>
    where
        F: FnOnce(Option<&UserRecord>) -> Result<T>,
    {
        let mut caller: Option<UserRecord> = None;
        for gate in self.gates {
            caller = Some(match gate {
                Gate::Authenticated => require_authenticated(self.users, actor)?,
                Gate::Admin => require_admin(self.users, actor)?,
            });
        }

        if let Some(audit) = self.audit {
            let snapshot = match &caller {
                Some(user) => Some(user.clone()),
                None => actor.and_then(|id| self.users.user(id)),
            };
            if let Some(user) = snapshot {
                audit.record(&user, self.name, args);
            }
        }

        handler(caller.as_ref())
    }
}
