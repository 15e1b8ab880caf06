// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly fmt subscriber filtered by `RUST_LOG`, falling
/// back to `info`. Safe to call from every test.
pub fn init_logging() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_test_writer()
		.try_init();
}
