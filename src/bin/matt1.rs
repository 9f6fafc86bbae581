// Ganesha D-Bus Probe - MATT1 Probe
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Calls `method2("MaGiC")` on the MATT1 object.

use ganesha_dbus_probe::{run_preset, Probe};

fn main() -> anyhow::Result<()> {
    run_preset(Probe::matt1())
}
