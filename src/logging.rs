// Ganesha D-Bus Probe - Logging
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `fallback`. Output goes to stderr; stdout is kept
/// for the probe reply.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Already installed when called twice in one process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
