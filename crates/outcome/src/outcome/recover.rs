// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Outcome;

impl<T, E> Outcome<T, E> {
	/// Turns a failure into a success holding `f(error)`. A success is
	/// returned unchanged.
	pub fn recover<F>(self, f: F) -> Self
	where
		F: FnOnce(Option<E>) -> Option<T>,
	{
		match self {
			Outcome::Success(_) => self,
			Outcome::Failure(error) => Outcome::success_opt(f(error)),
		}
	}

	/// Replaces a failure with the outcome returned by `f`, which may itself
	/// fail with a different error type.
	pub fn try_recover<E2, F>(self, f: F) -> Outcome<T, E2>
	where
		F: FnOnce(Option<E>) -> Outcome<T, E2>,
	{
		match self {
			Outcome::Success(value) => Outcome::Success(value),
			Outcome::Failure(error) => f(error),
		}
	}
}
