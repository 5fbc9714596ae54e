//! One executor shared by parallel hosts: instances are independent.

use std::sync::Arc;
use std::thread;

use crate::common::*;

#[test]
fn test_parallel_seeded_creates_agree() {
    let executor = Arc::new(Executor::new());
    let request = IntegerRequest::new(1, 1_000_000).with_seed("parallel");
    let expected = create(&executor, request.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let executor = Arc::clone(&executor);
            let request = request.clone();
            thread::spawn(move || create(&executor, request))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn test_parallel_instances_stay_in_their_ranges() {
    let executor = Arc::new(Executor::new());

    let handles: Vec<_> = (0..8i64)
        .map(|i| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                let (min, max) = (i * 100, i * 100 + 99);
                (0..50)
                    .map(|_| create(&executor, IntegerRequest::new(min, max)))
                    .all(|s| s.min() == min && s.max() == max && s.in_range())
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}
