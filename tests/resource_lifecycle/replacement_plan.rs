//! Replace-only mutability: every attribute change plans a replacement.

use crate::common::*;
use randint::Attribute;

fn plan(executor: &Executor, prior: Option<IntegerResource>, desired: IntegerRequest) -> Plan {
    match executor.execute(Command::Plan { prior, desired }).unwrap() {
        Output::Plan(p) => p,
        other => panic!("Expected Plan output, got {:?}", other),
    }
}

#[test]
fn test_each_attribute_forces_replacement() {
    let executor = Executor::new();
    let base = IntegerRequest::new(1, 10)
        .with_seed("s")
        .with_keepers(keepers(&[("k", "1")]));
    let state = create(&executor, base.clone());

    let cases = [
        (
            IntegerRequest {
                keepers: Some(keepers(&[("k", "2")])),
                ..base.clone()
            },
            Attribute::Keepers,
        ),
        (IntegerRequest { min: 0, ..base.clone() }, Attribute::Min),
        (IntegerRequest { max: 11, ..base.clone() }, Attribute::Max),
        (
            IntegerRequest {
                seed: None,
                ..base.clone()
            },
            Attribute::Seed,
        ),
    ];

    for (desired, attribute) in cases {
        assert_eq!(
            plan(&executor, Some(state.clone()), desired),
            Plan::Replace {
                attributes: vec![attribute]
            }
        );
    }
}

#[test]
fn test_unchanged_desired_state_is_noop() {
    let executor = Executor::new();
    let request = IntegerRequest::new(-5, 5).with_keepers(keepers(&[("a", "b")]));
    let state = create(&executor, request.clone());
    assert_eq!(plan(&executor, Some(state), request), Plan::NoOp);
}

#[test]
fn test_no_prior_plans_create() {
    assert_eq!(
        plan(&Executor::new(), None, IntegerRequest::new(1, 2)),
        Plan::Create
    );
}

#[test]
fn test_replacement_regenerates_from_new_seed() {
    let executor = Executor::new();
    let old = create(&executor, IntegerRequest::new(1, 1_000_000).with_seed("old"));
    let desired = IntegerRequest::new(1, 1_000_000).with_seed("new");

    let p = plan(&executor, Some(old.clone()), desired.clone());
    assert!(p.requires_generation());

    // The host destroys the old record and creates a new one
    assert_eq!(executor.execute(Command::Delete { state: old }), Ok(Output::Removed));
    let replacement = create(&executor, desired.clone());
    assert_eq!(replacement, create(&executor, desired));
}
