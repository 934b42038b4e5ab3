use serde_json::Value;

use super::LaunchConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileResult {
    /// An entry with the candidate's name is already present; nothing changed.
    AlreadyExists(String),
    /// The existing entries followed by the candidate.
    Appended(Vec<Value>),
    /// The configurations field is missing or is not a list.
    InvalidContainer,
}

/// Merges `candidate` into the existing configurations, keyed by name.
///
/// Pure: `existing` is only read, and the same inputs give the same result.
pub fn reconcile(
    existing: Option<&Value>,
    candidate: &LaunchConfig,
) -> serde_json::Result<ReconcileResult> {
    let Some(entries) = existing.and_then(Value::as_array) else {
        return Ok(ReconcileResult::InvalidContainer);
    };

    let duplicate = entries
        .iter()
        .any(|entry| entry.get("name").and_then(Value::as_str) == Some(candidate.name.as_str()));
    if duplicate {
        return Ok(ReconcileResult::AlreadyExists(candidate.name.clone()));
    }

    let mut appended = entries.clone();
    appended.push(candidate.to_value()?);
    Ok(ReconcileResult::Appended(appended))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::synthesize;
    use crate::subtest::build_identifier;
    use serde_json::json;

    fn candidate(literal: &str) -> LaunchConfig {
        let id = build_identifier("TestFoo", literal).unwrap();
        synthesize(&id, "/ws", "")
    }

    #[test]
    fn test_append_to_empty_list() {
        let existing = json!([]);
        let config = candidate("\"case one\"");

        let ReconcileResult::Appended(list) = reconcile(Some(&existing), &config).unwrap() else {
            panic!("expected Appended");
        };
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["args"], json!(["-test.run", "TestFoo/case_one"]));
    }

    #[test]
    fn test_append_preserves_existing_entries() {
        let existing = json!([
            {"name": "Attach", "type": "go", "request": "attach", "mode": "local"},
            {"name": "TestFoo/other", "type": "go"},
            "not even an object",
        ]);
        let config = candidate("\"case one\"");

        let ReconcileResult::Appended(list) = reconcile(Some(&existing), &config).unwrap() else {
            panic!("expected Appended");
        };
        let mut expected = existing.as_array().unwrap().clone();
        expected.push(config.to_value().unwrap());
        assert_eq!(list, expected);
    }

    #[test]
    fn test_duplicate_name_is_already_exists() {
        let config = candidate("\"case one\"");
        let existing = json!([{"name": "Attach"}, config.to_value().unwrap()]);
        let before = existing.clone();

        assert_eq!(
            reconcile(Some(&existing), &config).unwrap(),
            ReconcileResult::AlreadyExists("TestFoo/case_one".to_string())
        );
        assert_eq!(existing, before);
    }

    #[test]
    fn test_duplicate_detection_uses_name_only() {
        let config = candidate("\"case one\"");
        let existing = json!([{"name": "TestFoo/case_one", "type": "node"}]);
        assert!(matches!(
            reconcile(Some(&existing), &config).unwrap(),
            ReconcileResult::AlreadyExists(_)
        ));
    }

    #[test]
    fn test_non_list_container() {
        let config = candidate("\"a\"");
        assert_eq!(
            reconcile(Some(&json!({"name": "x"})), &config).unwrap(),
            ReconcileResult::InvalidContainer
        );
        assert_eq!(
            reconcile(Some(&json!(null)), &config).unwrap(),
            ReconcileResult::InvalidContainer
        );
        assert_eq!(
            reconcile(None, &config).unwrap(),
            ReconcileResult::InvalidContainer
        );
    }

    #[test]
    fn test_reconcile_is_deterministic() {
        let existing = json!([{"name": "Attach"}]);
        let config = candidate("\"a\"");
        assert_eq!(
            reconcile(Some(&existing), &config).unwrap(),
            reconcile(Some(&existing), &config).unwrap()
        );
    }
}
