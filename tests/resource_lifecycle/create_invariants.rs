//! Create/read/update/delete invariants.

use crate::common::*;
use randint::{Error, ImportField};

#[test]
fn test_created_record_satisfies_invariants() {
    let executor = Executor::new();
    for (min, max) in [(1, 10), (-10, -1), (0, 0), (i64::MIN, i64::MAX), (i64::MAX - 1, i64::MAX)] {
        let state = create(&executor, IntegerRequest::new(min, max));
        assert!(state.in_range(), "{} not in [{}, {}]", state.result(), min, max);
        assert_eq!(state.id(), state.result().to_string());
        assert_eq!(state.min(), min);
        assert_eq!(state.max(), max);
    }
}

#[test]
fn test_min_equals_max_yields_min() {
    let executor = Executor::new();
    for v in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(create(&executor, IntegerRequest::new(v, v)).result(), v);
        assert_eq!(
            create(&executor, IntegerRequest::new(v, v).with_seed("s")).result(),
            v
        );
    }
}

#[test]
fn test_inverted_range_fails_without_state() {
    let executor = Executor::new();
    let result = executor.execute(Command::Create {
        request: IntegerRequest::new(1, 0).with_seed("s"),
    });
    assert_eq!(result, Err(Error::InvalidRange { min: 1, max: 0 }));

    let diagnostic = result.unwrap_err().diagnostic();
    assert_eq!(diagnostic.summary, "Create Random Integer Error");
}

#[test]
fn test_keepers_and_seed_are_echoed() {
    let executor = Executor::new();
    let k = keepers(&[("ami_id", "ami-0abc"), ("rev", "3")]);
    let state = create(
        &executor,
        IntegerRequest::new(1, 50000)
            .with_seed("priority")
            .with_keepers(k.clone()),
    );
    assert_eq!(state.keepers(), Some(&k));
    assert_eq!(state.seed(), Some("priority"));
}

#[test]
fn test_read_is_byte_identical_to_create() {
    let executor = Executor::new();
    let state = create(&executor, IntegerRequest::new(1, 100).with_keepers(keepers(&[("a", "b")])));
    let written = serde_json::to_string(&state).unwrap();

    let read = executor
        .execute(Command::Read {
            state: serde_json::from_str(&written).unwrap(),
        })
        .unwrap();
    let read_json = match read {
        Output::State(s) => serde_json::to_string(&s).unwrap(),
        other => panic!("Expected State output, got {:?}", other),
    };
    assert_eq!(read_json, written);
}

#[test]
fn test_update_never_regenerates() {
    let executor = Executor::new();
    let state = create(&executor, IntegerRequest::new(0, i64::MAX));
    for _ in 0..5 {
        let out = executor
            .execute(Command::Update {
                prior: state.clone(),
                desired: IntegerRequest::new(0, i64::MAX),
            })
            .unwrap();
        assert_eq!(out, Output::State(state.clone()));
    }
}

#[test]
fn test_delete_signals_removal() {
    let executor = Executor::new();
    let state = create(&executor, IntegerRequest::new(1, 2));
    assert_eq!(executor.execute(Command::Delete { state }), Ok(Output::Removed));
}

#[test]
fn test_error_types_are_distinct_per_operation() {
    let executor = Executor::new();
    let err = executor
        .execute(Command::Import {
            id: "5,one,10".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ImportField {
            field: ImportField::Min,
            ..
        }
    ));
    assert_eq!(err.diagnostic().summary, "Import Random Integer Error");
}
