// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#[macro_use]
mod common;

use std::cell::{Cell, RefCell};

use common::Subject;
use outcome::Outcome;

fn check_success(outcome: Subject, want: Option<&'static str>) {
	let calls = Cell::new(0);

	let inspected = outcome.inspect(|v| {
		assert_eq!(v.copied(), want);
		calls.set(calls.get() + 1);
	});
	assert_eq!(inspected, outcome);

	let inspected = outcome.inspect_error(|_| panic!("should not be called"));
	assert_eq!(inspected, outcome);

	assert_eq!(calls.get(), 1);
}

fn check_failure(outcome: Subject, want: Option<&'static str>) {
	let calls = Cell::new(0);

	let inspected = outcome.inspect(|_| panic!("should not be called"));
	assert_eq!(inspected, outcome);

	let inspected = outcome.inspect_error(|e| {
		assert_eq!(e.copied(), want);
		calls.set(calls.get() + 1);
	});
	assert_eq!(inspected, outcome);

	assert_eq!(calls.get(), 1);
}

outcome_cases!(success: check_success, failure: check_failure);

#[test]
fn test_inspect_in_fluent_chain() {
	let log = RefCell::new(Vec::new());
	let start: Outcome<i32, String> = Outcome::success(2);

	let result = start
		.inspect(|v| log.borrow_mut().push(format!("before {v:?}")))
		.map(|v| v.map(|v| v * 21))
		.inspect(|v| log.borrow_mut().push(format!("after {v:?}")))
		.inspect_error(|_| log.borrow_mut().push("failed".to_string()));

	assert_eq!(result, Outcome::success(42));
	assert_eq!(log.into_inner(), vec!["before Some(2)".to_string(), "after Some(42)".to_string()]);
}
