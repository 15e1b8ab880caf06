// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
};

/// The discriminant of an [`Outcome`](crate::Outcome), without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
	Success,
	Failure,
}

impl Variant {
	pub const fn is_success(&self) -> bool {
		matches!(self, Variant::Success)
	}

	pub const fn is_failure(&self) -> bool {
		matches!(self, Variant::Failure)
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Variant::Success => "SUCCESS",
			Variant::Failure => "FAILURE",
		}
	}
}

impl Display for Variant {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
