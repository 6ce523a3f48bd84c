//! Combinators never call their callback on the variant they do not handle.

use pebbles::{Fault, Outcome};
use rstest::{fixture, rstest};
use test_helpers::{Probe, recoverable};

#[fixture]
fn probe() -> Probe<&'static str> {
    Probe::new()
}

#[rstest]
fn success_path_callbacks_skip_failures(probe: Probe<&'static str>) {
    let fault = recoverable("skipped");
    let failure: Outcome<i32> = Outcome::Failure(fault.clone());

    let mapped = failure.clone().map(|v| {
        probe.record("map");
        Ok(v)
    });
    let chained = failure.clone().flat_map(|v| {
        probe.record("flat_map");
        Outcome::success(v)
    });
    let filtered = failure.clone().filter(|_| {
        probe.record("filter");
        Ok(true)
    });
    let folded = failure.clone().fold(|_| 0, |v| {
        probe.record("fold");
        Ok(v)
    });
    failure.clone().for_each(|_| probe.record("for_each"));

    assert!(probe.untouched(), "called: {:?}", probe.seen());
    for outcome in [mapped, chained, filtered] {
        assert_eq!(outcome, failure);
    }
    assert_eq!(folded, 0);
}

#[rstest]
fn failure_path_callbacks_skip_successes(probe: Probe<&'static str>) {
    let success = Outcome::success(5);

    let recovered = success.clone().recover(|_| {
        probe.record("recover");
        Ok(0)
    });
    let rescued = success.clone().recover_with(|_| {
        probe.record("recover_with");
        Outcome::success(0)
    });
    let supplied = success.clone().or_else_with(|| {
        probe.record("or_else_with");
        Outcome::success(0)
    });
    let defaulted = success.clone().get_or_else_with(|| {
        probe.record("get_or_else_with");
        0
    });

    assert!(probe.untouched(), "called: {:?}", probe.seen());
    for outcome in [recovered, rescued, supplied] {
        assert_eq!(outcome, success);
    }
    assert_eq!(defaulted, 5);
}

#[rstest]
fn each_callback_runs_once_on_its_own_path(probe: Probe<&'static str>) {
    let _mapped = Outcome::success(1).map(|v| {
        probe.record("map");
        Ok(v)
    });
    let _recovered = Outcome::<i32>::failure(Fault::msg("x")).recover(|_| {
        probe.record("recover");
        Ok(0)
    });
    Outcome::success(2).accept(|_| probe.record("accept"), |_| probe.record("unreachable"));
    assert_eq!(probe.seen(), vec!["map", "recover", "accept"]);
}

#[rstest]
fn a_failed_step_stops_the_pipeline(probe: Probe<&'static str>) {
    let outcome = Outcome::success("Hello")
        .map(|_| -> pebbles::Fallible<&str> { Err(Fault::msg("access denied")) })
        .map(|s| {
            probe.record("second step");
            Ok(s.len())
        })
        .filter(|_| {
            probe.record("third step");
            Ok(true)
        });
    assert!(probe.untouched());
    assert_eq!(
        outcome.error().map(ToString::to_string).as_deref(),
        Some("access denied")
    );
}
