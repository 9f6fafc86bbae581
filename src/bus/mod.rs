// Ganesha D-Bus Probe - Bus Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Session bus access: one-time setup, the connection handle and
//! remote object proxies.

mod client;
mod error;
mod setup;

pub use client::{resolve_owner, MethodCall, NameResolver, RemoteObject, SessionBus};
pub use error::{classify_error_name, BusError, CallTarget, NameKind};
pub use setup::BusSetup;

/// Well-known name the NFS-Ganesha daemon owns on the session bus.
pub const BUS_NAME: &str = "org.ganesha.nfsd";

/// D-Bus object paths.
pub mod paths {
    /// Callback simulator endpoint.
    pub const CBSIM: &str = "/org/ganesha/nfsd/CBSIM";
    pub const MATT1: &str = "/org/ganesha/nfsd/MATT1";
}

/// Bus daemon addressing, used for name resolution.
pub mod daemon {
    pub const BUS_NAME: &str = "org.freedesktop.DBus";
    pub const PATH: &str = "/org/freedesktop/DBus";
    pub const INTERFACE: &str = "org.freedesktop.DBus";
}

/// Standard D-Bus error names the probe tells apart.
pub mod error_names {
    pub const SERVICE_UNKNOWN: &str = "org.freedesktop.DBus.Error.ServiceUnknown";
    pub const NAME_HAS_NO_OWNER: &str = "org.freedesktop.DBus.Error.NameHasNoOwner";
    pub const UNKNOWN_OBJECT: &str = "org.freedesktop.DBus.Error.UnknownObject";
    pub const UNKNOWN_METHOD: &str = "org.freedesktop.DBus.Error.UnknownMethod";
    pub const UNKNOWN_INTERFACE: &str = "org.freedesktop.DBus.Error.UnknownInterface";
}
