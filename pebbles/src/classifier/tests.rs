//! Unit tests for the classification policy and the callback guard.

use rstest::rstest;
use std::{
    any::Any,
    hint,
    panic::{self, AssertUnwindSafe},
};

use super::{ErrorClass, classify, classify_panic, guard};
use crate::error::{
    CancelKind, Cancelled, Fallible, Fatal, Fault, Interrupted, NoSuchElement, Panicked,
};

fn unwind_payload<R>(callback: impl FnOnce() -> R) -> Box<dyn Any + Send> {
    match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(_) => panic!("expected the callback to unwind"),
        Err(payload) => payload,
    }
}

fn guarded_error(callback: impl FnOnce() -> Fallible<i32>) -> Fault {
    match guard(callback) {
        Ok(value) => panic!("expected a captured error, got {value}"),
        Err(fault) => fault,
    }
}

#[rstest]
#[case(Fault::msg("plain"), ErrorClass::Recoverable)]
#[case(Fault::new(NoSuchElement::no_value()), ErrorClass::Recoverable)]
#[case(Fault::new(Panicked::new(String::from("boom"))), ErrorClass::Recoverable)]
#[case(Fault::new(Fatal::new("oom")), ErrorClass::FatalUnrecoverable)]
#[case(Fault::new(Cancelled::new(CancelKind::Interrupt)), ErrorClass::Cancellation)]
#[case(
    Fault::new(Interrupted::new(Fault::new(Cancelled::timeout()))),
    ErrorClass::Cancellation
)]
fn classifies_faults(#[case] fault: Fault, #[case] expected: ErrorClass) {
    assert_eq!(classify(&fault), expected);
}

#[rstest]
#[case(Box::new("static message"), ErrorClass::Recoverable)]
#[case(Box::new(String::from("owned message")), ErrorClass::Recoverable)]
#[case(Box::new(42_u8), ErrorClass::Recoverable)]
#[case(Box::new(Fault::msg("payload")), ErrorClass::Recoverable)]
#[case(Box::new(Fatal::new("linkage")), ErrorClass::FatalUnrecoverable)]
#[case(Box::new(Fault::new(Fatal::new("vm"))), ErrorClass::FatalUnrecoverable)]
#[case(Box::new(Cancelled::user("stop")), ErrorClass::Cancellation)]
#[case(
    Box::new(Interrupted::new(Fault::new(Cancelled::timeout()))),
    ErrorClass::Cancellation
)]
fn classifies_panic_payloads(#[case] payload: Box<dyn Any + Send>, #[case] expected: ErrorClass) {
    assert_eq!(classify_panic(&*payload), expected);
}

#[test]
fn only_recoverable_errors_are_captured() {
    assert!(ErrorClass::Recoverable.is_captured());
    assert!(!ErrorClass::FatalUnrecoverable.is_captured());
    assert!(!ErrorClass::Cancellation.is_captured());
}

#[test]
fn passes_values_through() {
    assert_eq!(guard(|| Ok(5)).ok(), Some(5));
}

#[test]
fn captures_recoverable_returned_error_unchanged() {
    let original = Fault::msg("recoverable");
    let expected = original.clone();
    let captured = guarded_error(move || Err(original));
    assert!(captured.ptr_eq(&expected));
}

#[test]
fn captures_panic_message() {
    let captured = guarded_error(|| panic!("exploded"));
    assert_eq!(captured.short_name(), "Panicked");
    assert_eq!(captured.to_string(), "exploded");
}

#[test]
fn captures_formatted_panic_message() {
    let divisor = hint::black_box(0);
    let captured = guarded_error(|| Ok(7 / divisor));
    assert!(captured.is::<Panicked>());
    assert!(captured.to_string().contains("divide by zero"));
}

#[test]
fn re_raises_returned_fatal_error_unchanged() {
    let fatal = Fault::new(Fatal::new("out of memory"));
    let expected = fatal.clone();
    let payload = unwind_payload(move || guard(move || -> Fallible<i32> { Err(fatal) }));
    let raised = payload.downcast_ref::<Fault>();
    assert!(raised.is_some_and(|fault| fault.ptr_eq(&expected)));
}

#[test]
fn re_raises_fatal_panic_payload_unchanged() {
    let payload = unwind_payload(|| {
        guard(|| -> Fallible<i32> { panic::resume_unwind(Box::new(Fatal::new("linkage"))) })
    });
    let fatal = payload.downcast_ref::<Fatal>().map(Fatal::reason);
    assert_eq!(fatal, Some("linkage"));
}

#[test]
fn wraps_cancellation_in_interrupted() {
    let cancelled = Fault::new(Cancelled::user("shutdown requested"));
    let expected = cancelled.clone();
    let payload = unwind_payload(move || guard(move || -> Fallible<i32> { Err(cancelled) }));
    let interrupted = payload.downcast_ref::<Interrupted>();
    assert!(interrupted.is_some_and(|raised| raised.cause().ptr_eq(&expected)));
}

#[test]
fn wraps_cancellation_panics_in_interrupted() {
    let payload = unwind_payload(|| {
        guard(|| -> Fallible<i32> { panic::resume_unwind(Box::new(Cancelled::timeout())) })
    });
    let kind = payload
        .downcast_ref::<Interrupted>()
        .and_then(|raised| raised.cause().downcast_ref::<Cancelled>())
        .map(Cancelled::kind);
    assert_eq!(kind, Some(CancelKind::Timeout));
}

#[test]
fn does_not_double_wrap_interrupted() {
    let cause = Fault::new(Cancelled::timeout());
    let expected = cause.clone();
    let payload = unwind_payload(move || {
        guard(move || -> Fallible<i32> {
            guard(move || -> Fallible<i32> { Err(cause) })
        })
    });
    let interrupted = payload.downcast_ref::<Interrupted>();
    assert!(interrupted.is_some_and(|raised| raised.cause().ptr_eq(&expected)));
}

#[test]
fn nested_fatal_escalation_passes_outer_guard() {
    let fatal = Fault::new(Fatal::new("nested"));
    let expected = fatal.clone();
    let payload = unwind_payload(move || {
        guard(move || -> Fallible<i32> { guard(move || -> Fallible<i32> { Err(fatal) }) })
    });
    let raised = payload.downcast_ref::<Fault>();
    assert!(raised.is_some_and(|fault| fault.ptr_eq(&expected)));
}
