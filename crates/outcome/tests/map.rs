// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#[macro_use]
mod common;

use common::{Subject, called, not_called, not_supplied};
use outcome::Outcome;
use outcome_testing::{assert_failure, assert_success};

fn check_success(outcome: Subject, want: Option<&'static str>) {
	assert_success!(outcome.map(called(want, Some("map"))), Some("map"));
	assert_success!(outcome.map_or(called(want, Some("map_or")), Some("map_or_default")), Some("map_or"));
	assert_success!(outcome.map_or_get(called(want, Some("map_or_get")), not_supplied), Some("map_or_get"));
	assert_success!(outcome.map_or_else(called(want, Some("map_or_else")), not_called), Some("map_or_else"));
	assert_success!(outcome.map_error(not_called::<_, Option<i32>>), want);
}

fn check_failure(outcome: Subject, want: Option<&'static str>) {
	assert_failure!(outcome.map(not_called::<_, Option<i32>>), want);
	assert_success!(outcome.map_or(not_called, Some("map_or_default")), Some("map_or_default"));
	assert_success!(outcome.map_or_get(not_called, || Some("map_or_get")), Some("map_or_get"));
	assert_success!(outcome.map_or_else(not_called, called(want, Some("map_or_else"))), Some("map_or_else"));
	assert_failure!(outcome.map_error(called(want, Some("map_error"))), Some("map_error"));
}

outcome_cases!(success: check_success, failure: check_failure);

#[test]
fn test_map_chain_stops_at_first_failure() {
	let start: Outcome<i32, &str> = Outcome::success(1);
	let chained = start
		.map(|v| v.map(|v| v + 1))
		.flat_map(|_| Outcome::<i32, &str>::failure("halt"), not_called)
		.map(not_called::<_, Option<i32>>)
		.map_or_else(not_called, |e| e.map(str::len));
	assert_success!(chained, Some(4));
}
