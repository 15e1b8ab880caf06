// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{ContractViolation, Outcome, Variant};

impl<T, E> Outcome<T, E> {
	/// Returns the success payload, which is `None` for an empty success.
	///
	/// # Panics
	///
	/// Panics with [`ContractViolation::EmptyExtraction`] if the outcome is a
	/// failure.
	#[track_caller]
	pub fn unwrap(self) -> Option<T> {
		match self.try_unwrap() {
			Ok(value) => value,
			Err(violation) => violation.raise(),
		}
	}

	/// Non-panicking form of [`Outcome::unwrap`].
	pub fn try_unwrap(self) -> crate::Result<Option<T>> {
		match self {
			Outcome::Success(value) => Ok(value),
			Outcome::Failure(_) => Err(ContractViolation::empty_extraction("unwrap", Variant::Success)),
		}
	}

	pub fn unwrap_or(self, default: Option<T>) -> Option<T> {
		match self {
			Outcome::Success(value) => value,
			Outcome::Failure(_) => default,
		}
	}

	pub fn unwrap_or_get<F>(self, supplier: F) -> Option<T>
	where
		F: FnOnce() -> Option<T>,
	{
		match self {
			Outcome::Success(value) => value,
			Outcome::Failure(_) => supplier(),
		}
	}

	/// Returns the error payload, which is `None` for an empty failure.
	///
	/// # Panics
	///
	/// Panics with [`ContractViolation::EmptyExtraction`] if the outcome is a
	/// success.
	#[track_caller]
	pub fn unwrap_error(self) -> Option<E> {
		match self.try_unwrap_error() {
			Ok(error) => error,
			Err(violation) => violation.raise(),
		}
	}

	pub fn try_unwrap_error(self) -> crate::Result<Option<E>> {
		match self {
			Outcome::Success(_) => Err(ContractViolation::empty_extraction("unwrap_error", Variant::Failure)),
			Outcome::Failure(error) => Ok(error),
		}
	}
}
