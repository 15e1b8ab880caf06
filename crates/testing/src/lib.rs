// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Test helpers for code that produces [`Outcome`](outcome::Outcome) values.

mod assert;
mod logging;

pub use assert::{assert_failure, assert_failure_eq, assert_success, assert_success_eq};
pub use logging::init_logging;

/// Asserts that an outcome is a success and returns its payload.
///
/// With a second argument the payload must also equal the given `Option`.
#[macro_export]
macro_rules! assert_success {
	($outcome:expr $(,)?) => {
		$crate::assert_success($outcome)
	};
	($outcome:expr, $expected:expr $(,)?) => {
		$crate::assert_success_eq($outcome, $expected)
	};
}

/// Asserts that an outcome is a failure and returns its error payload.
///
/// With a second argument the payload must also equal the given `Option`.
#[macro_export]
macro_rules! assert_failure {
	($outcome:expr $(,)?) => {
		$crate::assert_failure($outcome)
	};
	($outcome:expr, $expected:expr $(,)?) => {
		$crate::assert_failure_eq($outcome, $expected)
	};
}
