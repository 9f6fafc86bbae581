// Ganesha D-Bus Probe - CBSIM Probe
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Calls `method1("GETCLIENTIDS")` on the callback simulator object.

use ganesha_dbus_probe::{run_preset, Probe};

fn main() -> anyhow::Result<()> {
    run_preset(Probe::cbsim())
}
