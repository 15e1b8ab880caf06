// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod convert;
mod inspect;
mod map;
mod recover;
mod unwrap;

use crate::Variant;

/// Either a success or a failure, each carrying a payload that may be absent.
///
/// An absent payload is stored as `None`. `Success(None)` and `Failure(None)`
/// are the canonical empty outcomes, shared by every instantiation of `T` and
/// `E` through [`Outcome::EMPTY_SUCCESS`] and [`Outcome::EMPTY_FAILURE`].
///
/// Every combinator consumes the outcome and yields either a new outcome or
/// the one it was called on. The callback of the branch that does not match is
/// never invoked.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
	Success(Option<T>),
	Failure(Option<E>),
}

impl<T, E> Outcome<T, E> {
	/// The success without a payload.
	pub const EMPTY_SUCCESS: Self = Outcome::Success(None);

	/// The failure without an error payload.
	pub const EMPTY_FAILURE: Self = Outcome::Failure(None);

	pub const fn empty_success() -> Self {
		Self::EMPTY_SUCCESS
	}

	pub const fn success(value: T) -> Self {
		Outcome::Success(Some(value))
	}

	/// Builds a success from a payload that may be absent, falling back to
	/// [`Outcome::EMPTY_SUCCESS`] for `None`.
	pub fn success_opt(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::success(value),
			None => Self::EMPTY_SUCCESS,
		}
	}

	pub const fn empty_failure() -> Self {
		Self::EMPTY_FAILURE
	}

	pub const fn failure(error: E) -> Self {
		Outcome::Failure(Some(error))
	}

	pub fn failure_opt(error: Option<E>) -> Self {
		match error {
			Some(error) => Self::failure(error),
			None => Self::EMPTY_FAILURE,
		}
	}

	#[inline]
	pub const fn is_success(&self) -> bool {
		matches!(self, Outcome::Success(_))
	}

	#[inline]
	pub const fn is_failure(&self) -> bool {
		matches!(self, Outcome::Failure(_))
	}

	#[inline]
	pub const fn variant(&self) -> Variant {
		match self {
			Outcome::Success(_) => Variant::Success,
			Outcome::Failure(_) => Variant::Failure,
		}
	}
}
