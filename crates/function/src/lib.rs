// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Fixed-arity callable traits.
//!
//! Each `FunctionN` names a function of `N` arguments producing `R`. Every
//! closure or function item with a matching `Fn` signature implements the
//! trait, so callers can accept `impl Function3<A1, A2, A3, R>` where a named
//! arity reads better than a bare `Fn` bound.

macro_rules! function {
	( $( $(#[$meta:meta])* $name:ident ( $( $arg:ident : $ty:ident ),+ ) );* $(;)? ) => {
		$(
			$(#[$meta])*
			pub trait $name<$($ty,)+ R> {
				fn apply(&self, $($arg: $ty),+) -> R;
			}

			impl<F, $($ty,)+ R> $name<$($ty,)+ R> for F
			where
				F: Fn($($ty),+) -> R,
			{
				#[inline]
				fn apply(&self, $($arg: $ty),+) -> R {
					self($($arg),+)
				}
			}
		)*
	};
}

function! {
	/// A function of one argument.
	Function1(a1: A1);
	/// A function of two arguments.
	Function2(a1: A1, a2: A2);
	/// A function of three arguments.
	Function3(a1: A1, a2: A2, a3: A3);
	/// A function of four arguments.
	Function4(a1: A1, a2: A2, a3: A3, a4: A4);
	/// A function of five arguments.
	Function5(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
	/// A function of six arguments.
	Function6(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
	/// A function of seven arguments.
	Function7(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
	/// A function of eight arguments.
	Function8(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
	/// A function of nine arguments.
	Function9(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9);
}
