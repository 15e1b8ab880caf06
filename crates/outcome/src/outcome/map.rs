// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Outcome;

impl<T, E> Outcome<T, E> {
	/// Maps the success payload with `f`, leaving a failure untouched.
	///
	/// On a failure `f` is not called and the error payload moves into the
	/// returned outcome as is.
	///
	/// ```
	/// use outcome::Outcome;
	///
	/// let outcome: Outcome<&str, ()> = Outcome::success("ok");
	/// assert_eq!(outcome.map(|s| s.map(str::len)), Outcome::success(2));
	/// ```
	pub fn map<U, F>(self, f: F) -> Outcome<U, E>
	where
		F: FnOnce(Option<T>) -> Option<U>,
	{
		match self {
			Outcome::Success(value) => Outcome::success_opt(f(value)),
			Outcome::Failure(error) => Outcome::Failure(error),
		}
	}

	/// Maps the success payload with `f`, or turns a failure into a success
	/// holding `default`.
	///
	/// `default` is an ordinary argument and is therefore evaluated by the
	/// caller even when the outcome is a success. Use [`Outcome::map_or_get`]
	/// when producing it is costly.
	pub fn map_or<U, F>(self, f: F, default: Option<U>) -> Outcome<U, E>
	where
		F: FnOnce(Option<T>) -> Option<U>,
	{
		match self {
			Outcome::Success(value) => Outcome::success_opt(f(value)),
			Outcome::Failure(_) => Outcome::success_opt(default),
		}
	}

	/// Like [`Outcome::map_or`], with the fallback produced by `supplier` on a
	/// failure only.
	pub fn map_or_get<U, F, D>(self, f: F, supplier: D) -> Outcome<U, E>
	where
		F: FnOnce(Option<T>) -> Option<U>,
		D: FnOnce() -> Option<U>,
	{
		match self {
			Outcome::Success(value) => Outcome::success_opt(f(value)),
			Outcome::Failure(_) => Outcome::success_opt(supplier()),
		}
	}

	/// Like [`Outcome::map_or`], with the fallback computed from the error
	/// payload.
	pub fn map_or_else<U, F, D>(self, f: F, on_failure: D) -> Outcome<U, E>
	where
		F: FnOnce(Option<T>) -> Option<U>,
		D: FnOnce(Option<E>) -> Option<U>,
	{
		match self {
			Outcome::Success(value) => Outcome::success_opt(f(value)),
			Outcome::Failure(error) => Outcome::success_opt(on_failure(error)),
		}
	}

	/// Maps the error payload with `f`, leaving a success untouched.
	pub fn map_error<O, F>(self, f: F) -> Outcome<T, O>
	where
		F: FnOnce(Option<E>) -> Option<O>,
	{
		match self {
			Outcome::Success(value) => Outcome::Success(value),
			Outcome::Failure(error) => Outcome::failure_opt(f(error)),
		}
	}

	/// Calls exactly one of `on_success` or `on_failure` and returns its
	/// outcome as is.
	///
	/// ```
	/// use outcome::Outcome;
	///
	/// let outcome: Outcome<&str, &str> = Outcome::failure("missing");
	/// let resolved: Outcome<i32, String> = outcome.flat_map(
	/// 	|_| Outcome::success(1),
	/// 	|e| Outcome::failure_opt(e.map(|e| format!("lookup: {e}"))),
	/// );
	/// assert_eq!(resolved, Outcome::failure("lookup: missing".to_string()));
	/// ```
	pub fn flat_map<U, E2, S, F>(self, on_success: S, on_failure: F) -> Outcome<U, E2>
	where
		S: FnOnce(Option<T>) -> Outcome<U, E2>,
		F: FnOnce(Option<E>) -> Outcome<U, E2>,
	{
		match self {
			Outcome::Success(value) => on_success(value),
			Outcome::Failure(error) => on_failure(error),
		}
	}
}
