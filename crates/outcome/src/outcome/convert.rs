// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Outcome;

impl<T, E> Outcome<T, E> {
	/// The success payload, if this is a success that carries one.
	pub fn ok(self) -> Option<T> {
		match self {
			Outcome::Success(value) => value,
			Outcome::Failure(_) => None,
		}
	}

	/// The error payload, if this is a failure that carries one.
	pub fn err(self) -> Option<E> {
		match self {
			Outcome::Success(_) => None,
			Outcome::Failure(error) => error,
		}
	}

	pub fn as_ref(&self) -> Outcome<&T, &E> {
		match self {
			Outcome::Success(value) => Outcome::Success(value.as_ref()),
			Outcome::Failure(error) => Outcome::Failure(error.as_ref()),
		}
	}

	/// Converts into a standard `Result`, keeping the payloads optional.
	pub fn into_result(self) -> Result<Option<T>, Option<E>> {
		match self {
			Outcome::Success(value) => Ok(value),
			Outcome::Failure(error) => Err(error),
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(result: Result<T, E>) -> Self {
		match result {
			Ok(value) => Outcome::success(value),
			Err(error) => Outcome::failure(error),
		}
	}
}

impl<T, E> From<Outcome<T, E>> for Result<Option<T>, Option<E>> {
	fn from(outcome: Outcome<T, E>) -> Self {
		outcome.into_result()
	}
}
