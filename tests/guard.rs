#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use serde_json::json;
    use std::cell::Cell;
    use worklog::db::transactions::{MemoryTransactions, Transaction, TransactionStore};
    use worklog::db::users::{MemoryUsers, UserProfile, UserRecord};
    use worklog::libs::audit::AuditLogger;
    use worklog::libs::error::Error;
    use worklog::libs::guard::{require_admin, require_authenticated, Gate, GuardedMethod};
    use worklog::libs::settings::{MemorySettings, SettingKey, SettingValue, SettingsProvider};

    fn user(id: &str, name: &str, admin: bool, inactive: bool) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            profile: UserProfile { name: name.to_string() },
            is_admin: admin,
            inactive,
            emails: vec![format!("{}@example.com", id)],
        }
    }

    fn users() -> MemoryUsers {
        let mut users = MemoryUsers::new();
        users.insert(user("admin1", "Alex", true, false));
        users.insert(user("u1", "Danielle", false, false));
        users.insert(user("u2", "Morgan", false, true));
        users
    }

    #[test]
    fn test_require_authenticated() {
        let users = users();

        assert!(matches!(require_authenticated(&users, None), Err(Error::Auth(_))));
        assert!(matches!(require_authenticated(&users, Some("ghost")), Err(Error::Auth(_))));

        let err = require_authenticated(&users, Some("u2")).unwrap_err();
        assert_eq!(err.message_key(), Some("auth.account_inactive"));

        let caller = require_authenticated(&users, Some("u1")).unwrap();
        assert_eq!(caller.id, "u1");
    }

    #[test]
    fn test_require_admin() {
        let users = users();

        let err = require_admin(&users, Some("u1")).unwrap_err();
        assert_eq!(err.message_key(), Some("auth.admin_required"));

        let caller = require_admin(&users, Some("admin1")).unwrap();
        assert!(caller.is_admin);
    }

    #[test]
    fn test_rejected_call_never_runs_the_handler() {
        let users = users();
        let ran = Cell::new(false);

        let method = GuardedMethod::new("reports.workingTime", &[Gate::Admin], &users);
        let result: Result<(), _> = method.call(Some("u1"), &json!({}), |_| {
            ran.set(true);
            Ok(())
        });

        assert!(result.is_err());
        assert!(!ran.get());
    }

    #[test]
    fn test_gated_call_passes_the_resolved_caller() {
        let users = users();

        let method = GuardedMethod::new("timeEntries.save", &[Gate::Authenticated], &users);
        let name = method
            .call(Some("u1"), &json!({}), |caller| {
                Ok(caller.unwrap().name().to_string())
            })
            .unwrap();

        assert_eq!(name, "Danielle");
    }

    #[test]
    fn test_audit_records_the_invocation_when_enabled() {
        let users = users();
        let sink = MemoryTransactions::new();
        let mut store = MemorySettings::new();
        store.set_global(SettingKey::EnableTransactions, SettingValue::Bool(true));
        let settings = SettingsProvider::new(&store);
        let audit = AuditLogger::new(&sink, settings);

        let method = GuardedMethod::new("timeEntries.save", &[Gate::Authenticated], &users).with_audit(&audit);
        method
            .call(Some("u1"), &json!({ "projectId": "p1", "hours": 4 }), |_| Ok(()))
            .unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].method, "timeEntries.save");
        assert_eq!(records[0].user.id, "u1");
        assert_eq!(records[0].user.name, "Danielle");
        assert_eq!(records[0].args["projectId"], json!("p1"));
    }

    #[test]
    fn test_audit_is_silent_when_disabled() {
        let users = users();
        let sink = MemoryTransactions::new();
        let store = MemorySettings::new();
        let audit = AuditLogger::new(&sink, SettingsProvider::new(&store));

        let method = GuardedMethod::new("timeEntries.save", &[Gate::Authenticated], &users).with_audit(&audit);
        method.call(Some("u1"), &json!({}), |_| Ok(())).unwrap();

        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_rejected_call_is_not_audited() {
        let users = users();
        let sink = MemoryTransactions::new();
        let mut store = MemorySettings::new();
        store.set_global(SettingKey::EnableTransactions, SettingValue::Bool(true));
        let settings = SettingsProvider::new(&store);
        let audit = AuditLogger::new(&sink, settings);

        let method = GuardedMethod::new("reports.workingTime", &[Gate::Admin], &users).with_audit(&audit);
        let result: Result<(), _> = method.call(Some("u1"), &json!({}), |_| Ok(()));

        assert!(result.is_err());
        assert!(sink.records().is_empty());
    }

    struct FailingSink;

    impl TransactionStore for FailingSink {
        fn insert(&self, _transaction: Transaction) -> anyhow::Result<()> {
            Err(anyhow!("sink unavailable"))
        }
    }

    #[test]
    fn test_audit_failure_never_blocks_the_operation() {
        let _ = tracing_subscriber::fmt().try_init();
        let users = users();
        let sink = FailingSink;
        let mut store = MemorySettings::new();
        store.set_global(SettingKey::EnableTransactions, SettingValue::Bool(true));
        let settings = SettingsProvider::new(&store);
        let audit = AuditLogger::new(&sink, settings);

        let method = GuardedMethod::new("timeEntries.save", &[Gate::Authenticated], &users).with_audit(&audit);
        let result = method.call(Some("u1"), &json!({}), |_| Ok("saved"));

        assert_eq!(result.unwrap(), "saved");
    }
}
