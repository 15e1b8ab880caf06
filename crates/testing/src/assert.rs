// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use outcome::{Outcome, Variant};

#[track_caller]
pub fn assert_success<T: Debug, E: Debug>(outcome: Outcome<T, E>) -> Option<T> {
	match outcome {
		Outcome::Success(value) => value,
		failure => fail(&failure, Variant::Success),
	}
}

#[track_caller]
pub fn assert_success_eq<T: Debug + PartialEq, E: Debug>(outcome: Outcome<T, E>, expected: Option<T>) -> Option<T> {
	let actual = assert_success(outcome);
	assert_eq!(actual, expected, "success payload mismatch");
	actual
}

#[track_caller]
pub fn assert_failure<T: Debug, E: Debug>(outcome: Outcome<T, E>) -> Option<E> {
	match outcome {
		Outcome::Failure(error) => error,
		success => fail(&success, Variant::Failure),
	}
}

#[track_caller]
pub fn assert_failure_eq<T: Debug, E: Debug + PartialEq>(outcome: Outcome<T, E>, expected: Option<E>) -> Option<E> {
	let actual = assert_failure(outcome);
	assert_eq!(actual, expected, "failure payload mismatch");
	actual
}

#[track_caller]
fn fail<T: Debug, E: Debug>(actual: &Outcome<T, E>, expected: Variant) -> ! {
	let reason = match expected {
		Variant::Success => "Expected success, but actual failed.",
		Variant::Failure => "Expected failure, but actual succeeded.",
	};
	panic!("{reason} ==> expected: <{expected}> but was: <{actual:?}>")
}
