// Ganesha D-Bus Probe - Bus Setup
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Process-wide setup that must happen before the first connection.

use std::sync::OnceLock;

use tracing::debug;

static SETUP: OnceLock<BusSetup> = OnceLock::new();

/// Proof that the bus library was set up for this process.
///
/// [`SessionBus::connect`](super::SessionBus::connect) takes one, so no
/// connection can be opened before [`BusSetup::init`] ran.
#[derive(Debug)]
pub struct BusSetup {
    _private: (),
}

impl BusSetup {
    /// Set up the bus library. Later calls return the first instance.
    pub fn init() -> &'static BusSetup {
        SETUP.get_or_init(|| {
            debug!("Bus library set up");
            BusSetup { _private: () }
        })
    }
}
