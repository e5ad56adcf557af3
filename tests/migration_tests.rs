use std::io::Write;

use finance_core::errors::CoreError;
use finance_core::records::migrate::{load_from_path, upgrade};
use finance_core::records::{ExpenseCategory, SavingType, CURRENT_SCHEMA_VERSION};
use serde_json::json;
use tempfile::NamedTempFile;
use uuid::Uuid;

fn v0_document(first_goal: Uuid, second_goal: Uuid) -> serde_json::Value {
    json!({
        "expenses": [{
            "id": Uuid::new_v4(),
            "date": "2026-01-05",
            "description": "groceries",
            "amount": 1000.0
        }],
        "savings": [{
            "id": Uuid::new_v4(),
            "date": "2026-01-31",
            "amount": 20000.0
        }],
        "goals": [
            {
                "id": first_goal,
                "title": "emergency fund",
                "is_magic_wand": false,
                "created_at": "2025-12-01T10:00:00Z"
            },
            {
                "id": second_goal,
                "title": "sabbatical",
                "is_magic_wand": true,
                "created_at": "2025-12-02T10:00:00Z"
            }
        ]
    })
}

#[test]
fn v0_documents_backfill_defaults() {
    let snapshot = upgrade(v0_document(Uuid::new_v4(), Uuid::new_v4())).expect("upgrade");
    assert_eq!(snapshot.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(snapshot.expenses[0].category, ExpenseCategory::Misc);
    assert!(!snapshot.expenses[0].needs_check);
    assert_eq!(snapshot.savings[0].saving_type, SavingType::Balance);
    assert!(snapshot.incomes.is_empty());
    assert!(snapshot.targets.is_empty());
}

#[test]
fn magic_wand_flags_fold_into_the_priority_reference() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let snapshot = upgrade(v0_document(first, second)).expect("upgrade");
    assert_eq!(snapshot.priority_goal, Some(second));
    // The legacy flag is gone from the goal records themselves.
    assert_eq!(snapshot.goals.len(), 2);
}

#[test]
fn first_flagged_goal_wins_when_several_are_marked() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let mut document = v0_document(first, second);
    document["goals"][0]["is_magic_wand"] = serde_json::Value::Bool(true);
    let snapshot = upgrade(document).expect("upgrade");
    assert_eq!(snapshot.priority_goal, Some(first));
}

#[test]
fn current_documents_pass_through() {
    let snapshot = upgrade(json!({
        "schema_version": 1,
        "priority_goal": null
    }))
    .expect("upgrade");
    assert_eq!(snapshot.schema_version, CURRENT_SCHEMA_VERSION);
    assert!(snapshot.priority_goal.is_none());
}

#[test]
fn future_schema_versions_are_rejected() {
    let err = upgrade(json!({ "schema_version": 99 })).expect_err("must reject");
    match err {
        CoreError::UnsupportedSchema(version) => assert_eq!(version, 99),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn snapshots_load_from_stored_files() {
    let mut file = NamedTempFile::new().expect("temp file");
    let document = v0_document(Uuid::new_v4(), Uuid::new_v4());
    write!(file, "{document}").expect("write");

    let snapshot = load_from_path(file.path()).expect("load");
    assert_eq!(snapshot.expenses.len(), 1);
    assert_eq!(snapshot.schema_version, CURRENT_SCHEMA_VERSION);
}
