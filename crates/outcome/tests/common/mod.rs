// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use std::fmt::Debug;

use outcome::Outcome;

pub type Subject = Outcome<&'static str, &'static str>;

/// A callback that asserts it receives `expected` and then returns `returns`.
pub fn called<A: PartialEq + Debug, R>(expected: A, returns: R) -> impl FnOnce(A) -> R {
	move |actual| {
		assert_eq!(actual, expected, "callback received an unexpected argument");
		returns
	}
}

pub fn not_called<A, R>(_: A) -> R {
	panic!("should not be called")
}

pub fn not_supplied<R>() -> R {
	panic!("should not be called")
}

/// Generates one test per canonical input: the three ways of building a
/// success and the three ways of building a failure. `want` is the payload the
/// outcome carries.
#[allow(unused_macros)]
macro_rules! outcome_cases {
	(success: $success:ident, failure: $failure:ident $(,)?) => {
		#[test]
		fn test_empty_success() {
			$success(outcome::Outcome::empty_success(), None)
		}

		#[test]
		fn test_success_with_value() {
			$success(outcome::Outcome::success("test"), Some("test"))
		}

		#[test]
		fn test_success_opt_none() {
			$success(outcome::Outcome::success_opt(None), None)
		}

		#[test]
		fn test_empty_failure() {
			$failure(outcome::Outcome::empty_failure(), None)
		}

		#[test]
		fn test_failure_with_error() {
			$failure(outcome::Outcome::failure("test"), Some("test"))
		}

		#[test]
		fn test_failure_opt_none() {
			$failure(outcome::Outcome::failure_opt(None), None)
		}
	};
}
