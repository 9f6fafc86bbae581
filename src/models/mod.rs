// Ganesha D-Bus Probe - Models Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data models for probe results.

mod reply;

pub use reply::{render_value, Reply};
