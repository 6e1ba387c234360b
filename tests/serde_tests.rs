#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support on the plain data types.

use polykind::control::{Either, Validation};
use polykind::typeclass::Identity;
use rstest::rstest;

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(serde_json::from_str::<Either<String, i32>>(&left_json).unwrap(), left);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&right_json).unwrap(), right);
}

#[rstest]
fn either_json_format() {
    let right: Either<String, i32> = Either::Right(42);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":42}"#);
}

// =============================================================================
// Validation
// =============================================================================

#[rstest]
#[case(Validation::success(7))]
#[case(Validation::fail(vec!["too short".to_string(), "missing digit".to_string()]))]
fn validation_json_roundtrip(#[case] value: Validation<Vec<String>, i32>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Validation<Vec<String>, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn validation_failure_json_format() {
    let value: Validation<Vec<&str>, i32> = Validation::fail(vec!["bad"]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"Failure":["bad"]}"#);
}

// =============================================================================
// Identity
// =============================================================================

#[rstest]
fn identity_is_transparent_newtype() {
    let json = serde_json::to_string(&Identity(5)).unwrap();
    assert_eq!(json, "5");
    assert_eq!(serde_json::from_str::<Identity<i32>>(&json).unwrap(), Identity(5));
}
