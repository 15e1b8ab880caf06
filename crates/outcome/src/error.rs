// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::error;

use crate::Variant;

/// A caller broke the precondition of an [`Outcome`](crate::Outcome) operation.
///
/// This is never a domain failure. It points at a bug at the call site, which
/// is why the panicking extractors do not hand it back as a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
	#[error("{operation} called on {actual} outcome, expected {expected}")]
	EmptyExtraction {
		operation: &'static str,
		expected: Variant,
		actual: Variant,
	},
}

impl ContractViolation {
	pub(crate) fn empty_extraction(operation: &'static str, expected: Variant) -> Self {
		let actual = match expected {
			Variant::Success => Variant::Failure,
			Variant::Failure => Variant::Success,
		};
		ContractViolation::EmptyExtraction {
			operation,
			expected,
			actual,
		}
	}

	pub fn operation(&self) -> &'static str {
		match self {
			ContractViolation::EmptyExtraction {
				operation,
				..
			} => operation,
		}
	}

	/// Logs the violation and panics at the caller's location.
	#[track_caller]
	pub fn raise(self) -> ! {
		match &self {
			ContractViolation::EmptyExtraction {
				operation,
				expected,
				actual,
			} => {
				error!(operation = *operation, expected = %expected, actual = %actual, "outcome contract violation");
			}
		}
		panic!("{}", self)
	}
}
