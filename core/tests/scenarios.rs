use futures_executor::block_on;
use outcome_core::{Outcome, ToOutcome, TypedOutcome};
use std::collections::HashMap;
use tools::Recorder;

mod tools;

#[test]
fn test_map_success() {
    assert_eq!(TypedOutcome::success(42).map(|v| v * 2), TypedOutcome::success(84));
}

#[test]
fn test_map_failure() {
    let r = TypedOutcome::<i32>::failure("bad input").map(|v| v * 2);
    assert!(r.failed());
    assert_eq!(r.diagnostic(), Some("bad input"));
    assert_eq!(r.into_value(), (false, None));
}

#[test]
fn test_then_chain_stops_at_first_failure() {
    let recorder = Recorder::new();

    let r = Outcome::success()
        .then(recorder.step("step2", Outcome::failure("step2 failed")))
        .then(recorder.step("step3", Outcome::success()));

    assert_eq!(r.diagnostic(), Some("step2 failed"));
    assert_eq!(recorder.calls(), vec!["step2"]);
}

struct Inventory {
    stock: HashMap<&'static str, u32>,
}

impl Inventory {
    fn find(&self, sku: &str) -> TypedOutcome<u32> {
        self.stock
            .get(sku)
            .copied()
            .to_outcome_or(format!("unknown sku {}", sku))
    }

    fn reserve(&self, sku: &str, quantity: u32) -> TypedOutcome<u32> {
        self.find(sku)
            .and_then(|available| {
                (available >= quantity)
                    .to_outcome_or(format!("only {} left", available))
                    .map(|| TypedOutcome::success(available - quantity))
            })
            .otherwise(|d| format!("reserving {}: {}", sku, d))
    }
}

fn inventory() -> Inventory {
    Inventory {
        stock: HashMap::from([("apple", 3), ("pear", 0)]),
    }
}

#[test]
fn test_pipeline() {
    let inv = inventory();

    assert_eq!(inv.reserve("apple", 2), TypedOutcome::success(1));
    assert_eq!(
        inv.reserve("apple", 5).diagnostic(),
        Some("reserving apple: only 3 left")
    );
    assert_eq!(
        inv.reserve("plum", 1).diagnostic(),
        Some("reserving plum: unknown sku plum")
    );

    let summary = inv
        .reserve("pear", 1)
        .match_with(|left| format!("{} left", left), |d| format!("error: {}", d));
    assert_eq!(summary, "error: reserving pear: only 0 left");
}

#[test]
fn test_pipeline_effects_observe_only() {
    let recorder = Recorder::new();
    let inv = inventory();

    let r = inv
        .reserve("apple", 1)
        .tap(|left| recorder.record(format!("left {}", left)))
        .tap_error(|d| recorder.record(d))
        .erase();

    assert_eq!(r, Outcome::success());
    assert_eq!(recorder.calls(), vec!["left 2"]);
}

#[test]
fn test_async_chain_is_sequential() {
    let recorder = Recorder::new();

    let r = block_on(async {
        Outcome::success()
            .then_async(|| {
                let recorder = &recorder;
                async move {
                    recorder.record("fetch");
                    TypedOutcome::success(vec![3, 1, 2])
                }
            })
            .await
            .map_async(|mut v| async move {
                v.sort();
                v
            })
            .await
            .on_success_async(|v| {
                let first = v[0];
                let recorder = &recorder;
                async move { recorder.record(format!("first {}", first)) }
            })
            .await
            .and_then_async(|v| async move { v.last().copied().to_outcome() })
            .await
    });

    assert_eq!(r, TypedOutcome::success(3));
    assert_eq!(recorder.calls(), vec!["fetch", "first 1"]);
}

#[test]
fn test_async_failure_short_circuits() {
    let recorder = Recorder::new();

    let r: TypedOutcome<u8> = block_on(async {
        Outcome::failure("not authorised")
            .then_async(|| {
                let recorder = &recorder;
                async move {
                    recorder.record("fetch");
                    TypedOutcome::success(1u8)
                }
            })
            .await
            .map_error_async(|d| async move { format!("sync job: {}", d) })
            .await
    });

    assert_eq!(r.diagnostic(), Some("sync job: not authorised"));
    assert!(recorder.calls().is_empty());
}

#[test]
fn test_as_ref_keeps_original() {
    let owned = TypedOutcome::success("config".to_string());
    let len = owned.as_ref().map(|s| s.len()).value_or_default();

    assert_eq!(len, 6);
    assert_eq!(owned.value(), "config");
}
