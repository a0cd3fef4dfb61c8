use crate::db::users::UserRecord;
use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

/// Snapshot of the acting user at the time of the call.
///
/// Stored inline so the audit trail stays meaningful after accounts are
/// renamed or removed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSnapshot {
    pub id: String,
    pub name: String,
    pub emails: Vec<String>,
    pub admin: bool,
}

impl ActorSnapshot {
    pub fn of(user: &UserRecord) -> Self {
        ActorSnapshot {
            id: user.id.clone(),
            name: user.name().to_string(),
            emails: user.emails.clone(),
            admin: user.is_admin,
        }
    }
}

/// One audit record: who invoked which operation with what arguments.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub user: ActorSnapshot,
    pub method: String,
    pub args: Value,
    pub timestamp: DateTime<Utc>,
}

/// Insert-only sink for audit records. Transactions are never mutated or
/// deleted by this core.
pub trait TransactionStore {
    fn insert(&self, transaction: Transaction) -> Result<()>;
}

/// In-memory transaction log for tests and demo setups.
#[derive(Default)]
pub struct MemoryTransactions {
    records: Mutex<Vec<Transaction>>,
}

impl MemoryTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Transaction> {
        self.records.lock().clone()
    }
}

impl TransactionStore for MemoryTransactions {
    fn insert(&self, transaction: Transaction) -> Result<()> {
        self.records.lock().push(transaction);
        Ok(())
    }
}
