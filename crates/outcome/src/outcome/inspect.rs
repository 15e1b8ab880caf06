// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Outcome;

impl<T, E> Outcome<T, E> {
	/// Calls `on_success` with the success payload and returns `self`.
	pub fn inspect<F>(self, on_success: F) -> Self
	where
		F: FnOnce(Option<&T>),
	{
		if let Outcome::Success(value) = &self {
			on_success(value.as_ref());
		}
		self
	}

	/// Calls `on_failure` with the error payload and returns `self`.
	pub fn inspect_error<F>(self, on_failure: F) -> Self
	where
		F: FnOnce(Option<&E>),
	{
		if let Outcome::Failure(error) = &self {
			on_failure(error.as_ref());
		}
		self
	}
}
