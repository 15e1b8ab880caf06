// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! A value that is either a success or a failure, each with an optional payload.
//!
//! ```
//! use outcome::Outcome;
//!
//! let parsed: Outcome<i64, String> = Outcome::success(2);
//! let doubled = parsed.map(|v| v.map(|v| v * 2));
//! assert_eq!(doubled.unwrap(), Some(4));
//!
//! let missing: Outcome<i64, &str> = Outcome::failure("no input");
//! assert_eq!(missing.recover(|_| Some(0)), Outcome::success(0));
//! ```

mod error;
mod outcome;
mod variant;

pub use error::ContractViolation;
pub use outcome::Outcome;
pub use variant::Variant;

pub type Result<T> = std::result::Result<T, ContractViolation>;
