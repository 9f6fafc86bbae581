// Ganesha D-Bus Probe - Bus Errors
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Error taxonomy for session bus calls.

use std::fmt;

use thiserror::Error;

use super::error_names;

/// Which kind of bus identifier failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Service,
    ObjectPath,
    Interface,
    Method,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NameKind::Service => "service name",
            NameKind::ObjectPath => "object path",
            NameKind::Interface => "interface name",
            NameKind::Method => "method name",
        };
        f.write_str(label)
    }
}

/// Failures while talking to a remote object on the session bus.
#[derive(Error, Debug)]
pub enum BusError {
    /// The session bus could not be reached.
    #[error("failed to connect to session D-Bus: {0}")]
    Connect(#[source] zbus::Error),

    /// A bus identifier is malformed.
    #[error("invalid {kind} '{value}': {reason}")]
    InvalidName {
        kind: NameKind,
        value: String,
        reason: String,
    },

    /// The service is not running and could not be activated.
    #[error("service '{service}' is not available on the bus")]
    ServiceUnknown { service: String },

    /// The service exists but exports no object at the path.
    #[error("no object at '{path}' on service '{service}'")]
    ObjectNotFound { service: String, path: String },

    /// The object exists but does not answer to the method.
    #[error("object '{path}' has no method '{method}'")]
    MethodUnknown { path: String, method: String },

    /// The remote side replied with any other error.
    #[error("remote error {name}: {message}")]
    Remote { name: String, message: String },

    /// Any other bus library failure.
    #[error("D-Bus transport error: {0}")]
    Transport(#[from] zbus::Error),

    /// The reply body could not be decoded.
    #[error("failed to decode reply: {0}")]
    Reply(String),
}

/// Target of a call, used to fill in error details.
#[derive(Debug, Clone, Copy)]
pub struct CallTarget<'a> {
    pub service: &'a str,
    pub path: &'a str,
    pub method: &'a str,
}

impl BusError {
    /// Convert a failed method call into the matching error variant.
    pub(crate) fn from_call(err: zbus::Error, target: CallTarget<'_>) -> Self {
        match err {
            zbus::Error::MethodError(name, detail, _) => {
                classify_error_name(name.as_str(), detail, target)
            }
            other => BusError::Transport(other),
        }
    }
}

/// Map a D-Bus error name returned for a call to an error variant.
pub fn classify_error_name(
    name: &str,
    detail: Option<String>,
    target: CallTarget<'_>,
) -> BusError {
    match name {
        error_names::SERVICE_UNKNOWN | error_names::NAME_HAS_NO_OWNER => {
            BusError::ServiceUnknown {
                service: target.service.to_string(),
            }
        }
        error_names::UNKNOWN_OBJECT => BusError::ObjectNotFound {
            service: target.service.to_string(),
            path: target.path.to_string(),
        },
        error_names::UNKNOWN_METHOD | error_names::UNKNOWN_INTERFACE => BusError::MethodUnknown {
            path: target.path.to_string(),
            method: target.method.to_string(),
        },
        _ => BusError::Remote {
            name: name.to_string(),
            message: detail.unwrap_or_default(),
        },
    }
}
