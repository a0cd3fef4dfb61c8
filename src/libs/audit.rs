//! Best-effort audit logging of invoked operations.
//!
//! When the global `enableTransactions` setting is on, every guarded
//! operation is recorded as a [`Transaction`] before its handler runs: a
//! snapshot of the actor, the operation name, its serialized arguments and
//! the current time. A failing sink is reported at `warn` and otherwise
//! ignored; audit logging never blocks the operation itself.

use crate::db::transactions::{ActorSnapshot, Transaction, TransactionStore};
use crate::db::users::UserRecord;
use crate::libs::messages::Message;
use crate::libs::settings::SettingsProvider;
use chrono::Utc;
use serde_json::Value;
use tracing::warn;

pub struct AuditLogger<'a> {
    sink: &'a dyn TransactionStore,
    settings: SettingsProvider<'a>,
}

impl<'a> AuditLogger<'a> {
    pub fn new(sink: &'a dyn TransactionStore, settings: SettingsProvider<'a>) -> Self {
        AuditLogger { sink, settings }
    }

    /// Records one invocation if transaction logging is enabled.
    pub fn record(&self, actor: &UserRecord, method: &str, args: &Value) {
        if !self.settings.transactions_enabled() {
            return;
        }
        let transaction = Transaction {
            user: ActorSnapshot::of(actor),
            method: method.to_string(),
            args: args.clone(),
            timestamp: Utc::now(),
        };
        if let Err(err) = self.sink.insert(transaction) {
            warn!("{}", Message::TransactionLogFailed(err.to_string()));
        }
    }
}
