// Ganesha D-Bus Probe - Library Root
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Smoke-test probes for the NFS-Ganesha session bus endpoints.
//!
//! Each probe binary connects to the session bus, calls one method on one
//! object with a literal argument and prints the reply.

use std::io;

use anyhow::Result;
use tracing::debug;

pub mod bus;
pub mod config;
pub mod logging;
pub mod models;
pub mod probe;

pub use bus::{BusError, BusSetup};
pub use probe::Probe;

use config::Settings;

/// Run a preset probe and print its reply on stdout.
///
/// Stdout carries only the reply line; logs and errors go to stderr.
pub fn run_preset(probe: Probe) -> Result<()> {
    let settings = Settings::new();
    logging::init(settings.log_filter());
    settings.report();
    debug!("Settings from {}", settings.path().display());

    let setup = BusSetup::init();
    probe.run(setup, &mut io::stdout().lock())
}
