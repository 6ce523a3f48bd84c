//! Unit tests for fault handles and the library error kinds.

use rstest::rstest;
use std::{error::Error, num::ParseIntError};

use super::{CancelKind, Cancelled, Fatal, Fault, Interrupted, NoSuchElement, Unsupported};

fn parse_failure() -> ParseIntError {
    match "nope".parse::<i32>() {
        Ok(value) => panic!("expected a parse failure, got {value}"),
        Err(err) => err,
    }
}

#[rstest]
#[case(Fault::new(parse_failure()), "ParseIntError")]
#[case(Fault::new(NoSuchElement::no_value()), "NoSuchElement")]
#[case(Fault::new(Unsupported::success_failed()), "Unsupported")]
#[case(Fault::msg("boom"), "ErrorMessage")]
#[case(Fault::new(Fatal::new("oom")), "Fatal")]
fn records_short_type_name(#[case] fault: Fault, #[case] expected: &str) {
    assert_eq!(fault.short_name(), expected);
}

#[test]
fn boxed_errors_fall_back_to_generic_name() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(parse_failure());
    let fault = Fault::from_boxed(boxed);
    assert_eq!(fault.short_name(), "Error");
    assert_eq!(fault.to_string(), parse_failure().to_string());
}

#[test]
fn clones_share_identity() {
    let fault = Fault::msg("shared");
    let copy = fault.clone();
    assert!(fault.ptr_eq(&copy));
    assert_eq!(fault.addr(), copy.addr());
}

#[test]
fn equal_looking_faults_are_distinct() {
    let first = Fault::msg("same");
    let second = Fault::msg("same");
    assert_eq!(first.to_string(), second.to_string());
    assert!(!first.ptr_eq(&second));
}

#[test]
fn downcasts_to_the_captured_type() {
    let fault = Fault::from(NoSuchElement::no_value());
    assert!(fault.is::<NoSuchElement>());
    assert!(!fault.is::<Fatal>());
    let inner = fault
        .downcast_ref::<NoSuchElement>()
        .map(NoSuchElement::message);
    assert_eq!(inner, Some("No value present"));
}

#[test]
fn predicate_message_embeds_value() {
    let err = NoSuchElement::predicate_failed(&7);
    assert_eq!(err.to_string(), "Predicate does not hold for 7");
}

#[rstest]
#[case(Cancelled::timeout(), "cancelled (timeout)")]
#[case(Cancelled::user("stop"), "cancelled (user): stop")]
#[case(Cancelled::new(CancelKind::Shutdown), "cancelled (shutdown)")]
fn cancellation_describes_its_kind(#[case] cancelled: Cancelled, #[case] expected: &str) {
    assert_eq!(cancelled.to_string(), expected);
}

#[test]
fn interrupted_exposes_its_cause() {
    let cause = Fault::new(Cancelled::user("abort"));
    let interrupted = Interrupted::new(cause.clone());
    assert!(interrupted.cause().ptr_eq(&cause));
    let source = interrupted.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("cancelled (user): abort"));
    assert_eq!(
        interrupted.to_string(),
        "computation interrupted: cancelled (user): abort"
    );
}
