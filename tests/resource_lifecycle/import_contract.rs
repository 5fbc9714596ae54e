//! Import identifier contract.

use crate::common::*;
use randint::{Error, ImportField, RandintConfig};

#[test]
fn test_import_three_fields() {
    let state = import(&Executor::new(), "5,1,10");
    assert_eq!(state.id(), "5");
    assert_eq!(state.result(), 5);
    assert_eq!(state.min(), 1);
    assert_eq!(state.max(), 10);
    assert_eq!(state.seed(), None);
    assert_eq!(state.keepers(), Some(&Keepers::new()));
}

#[test]
fn test_import_four_fields() {
    let state = import(&Executor::new(), "5,1,10,abc");
    assert_eq!(state.id(), "5");
    assert_eq!(state.seed(), Some("abc"));
}

#[test]
fn test_import_five_fields_is_bad_format() {
    let err = Executor::new()
        .execute(Command::Import {
            id: "5,1,10,abc,extra".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, Error::ImportFormat { fields: 5 });
}

#[test]
fn test_import_bad_result_field() {
    let err = Executor::new()
        .execute(Command::Import {
            id: "x,1,10".to_string(),
        })
        .unwrap_err();
    match err {
        Error::ImportField { field, raw, reason } => {
            assert_eq!(field, ImportField::Result);
            assert_eq!(raw, "x");
            assert!(!reason.is_empty());
        }
        other => panic!("Expected ImportField error, got {:?}", other),
    }
}

#[test]
fn test_import_does_not_generate() {
    let executor = Executor::new();
    let a = import(&executor, "7,1,1000000");
    let b = import(&executor, "7,1,1000000");
    assert_eq!(a, b);
    assert_eq!(a.result(), 7);
}

#[test]
fn test_seeded_import_matches_seeded_create_shape() {
    let executor = Executor::new();
    let created = create(&executor, IntegerRequest::new(1, 100).with_seed("abc"));
    let id = format!("{},1,100,abc", created.result());
    let imported = import(&executor, &id);

    assert_eq!(imported.id(), created.id());
    assert_eq!(imported.result(), created.result());
    assert_eq!(imported.seed(), created.seed());
    // Imported records carry an empty keepers map, created ones echo the request
    assert_eq!(imported.keepers(), Some(&Keepers::new()));
    assert_eq!(created.keepers(), None);
}

/// Import trusts the supplied result: an out-of-range value is accepted.
/// This is a known gap in the contract, closed only by `strict_import`.
#[test]
fn test_out_of_range_result_is_accepted_by_default() {
    let state = import(&Executor::new(), "500,1,10");
    assert_eq!(state.result(), 500);
    assert!(!state.in_range());
}

#[test]
fn test_out_of_range_result_rejected_when_strict() {
    let executor = Executor::with_config(&RandintConfig {
        strict_import: true,
        ..RandintConfig::default()
    });
    let err = executor
        .execute(Command::Import {
            id: "500,1,10".to_string(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        Error::ImportOutOfRange {
            result: 500,
            min: 1,
            max: 10
        }
    );
}

#[test]
fn test_import_then_plan_is_noop_for_matching_config() {
    let executor = Executor::new();
    let state = import(&executor, "5,1,10,abc");
    let out = executor
        .execute(Command::Plan {
            prior: Some(state),
            desired: IntegerRequest::new(1, 10).with_seed("abc"),
        })
        .unwrap();
    assert_eq!(out, Output::Plan(Plan::NoOp));
}

#[test]
fn test_seed_with_separator_cannot_be_imported() {
    let executor = Executor::new();
    let created = create(&executor, IntegerRequest::new(1, 10).with_seed("a,b"));
    assert_eq!(created.seed(), Some("a,b"));

    let id = format!("{},{},{},{}", created.id(), created.min(), created.max(), "a,b");
    let err = executor.execute(Command::Import { id }).unwrap_err();
    assert_eq!(err, Error::ImportFormat { fields: 5 });
}
