// Ganesha D-Bus Probe - Session Bus Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Session bus connection and remote object proxies.

use tracing::{debug, info};
use zbus::blocking::Connection;
use zbus::names::{BusName, InterfaceName, MemberName};
use zbus::zvariant::ObjectPath;

use super::error::CallTarget;
use super::{daemon, error_names, BusError, BusSetup, NameKind};
use crate::models::Reply;

/// Something that answers a single method call with one string argument.
pub trait MethodCall {
    fn call(&self, method: &str, argument: &str) -> Result<Reply, BusError>;
}

/// Name ownership queries answered by the bus daemon.
pub trait NameResolver {
    /// Unique name currently owning `service`, `None` when nobody does.
    fn name_owner(&self, service: &str) -> Result<Option<String>, BusError>;

    /// Ask the bus daemon to activate `service`.
    fn start_service(&self, service: &str) -> Result<(), BusError>;
}

/// Find the unique name a call to `service` should go to.
///
/// An unowned well-known name is activated once through the bus daemon
/// before giving up. Unique names are returned as given.
pub fn resolve_owner<R: NameResolver + ?Sized>(
    resolver: &R,
    service: &str,
) -> Result<String, BusError> {
    if service.starts_with(':') {
        return Ok(service.to_string());
    }

    if let Some(owner) = resolver.name_owner(service)? {
        return Ok(owner);
    }

    info!("{} has no owner, requesting activation", service);
    resolver.start_service(service)?;

    resolver
        .name_owner(service)?
        .ok_or_else(|| BusError::ServiceUnknown {
            service: service.to_string(),
        })
}

/// Connection to the caller's session bus.
pub struct SessionBus {
    connection: Connection,
}

impl SessionBus {
    /// Connect to the session bus.
    pub fn connect(_setup: &BusSetup) -> Result<Self, BusError> {
        info!("Connecting to session D-Bus...");

        let connection = Connection::session().map_err(BusError::Connect)?;

        if let Some(name) = connection.unique_name() {
            debug!("Session bus assigned unique name {}", name.as_str());
        }
        info!("Connected to session D-Bus");

        Ok(Self { connection })
    }

    /// Resolve a proxy for the object at `path` on `service`.
    pub fn object(
        &self,
        service: &str,
        path: &str,
        interface: Option<&str>,
    ) -> Result<RemoteObject<'_>, BusError> {
        validate_name(NameKind::Service, service)?;
        validate_name(NameKind::ObjectPath, path)?;
        if let Some(interface) = interface {
            validate_name(NameKind::Interface, interface)?;
        }

        let destination = resolve_owner(self, service)?;

        debug!("Resolved proxy for {} ({}) at {}", service, destination, path);
        Ok(RemoteObject {
            bus: self,
            service: service.to_string(),
            destination,
            path: path.to_string(),
            interface: interface.map(str::to_string),
        })
    }
}

impl NameResolver for SessionBus {
    fn name_owner(&self, service: &str) -> Result<Option<String>, BusError> {
        let reply = self.connection.call_method(
            Some(daemon::BUS_NAME),
            daemon::PATH,
            Some(daemon::INTERFACE),
            "GetNameOwner",
            &(service,),
        );

        match reply {
            Ok(message) => {
                let owner: String = message.body().deserialize()?;
                Ok(Some(owner))
            }
            Err(zbus::Error::MethodError(name, _, _))
                if name.as_str() == error_names::NAME_HAS_NO_OWNER =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn start_service(&self, service: &str) -> Result<(), BusError> {
        let reply = self.connection.call_method(
            Some(daemon::BUS_NAME),
            daemon::PATH,
            Some(daemon::INTERFACE),
            "StartServiceByName",
            &(service, 0u32),
        );

        match reply {
            Ok(message) => {
                let outcome: u32 = message.body().deserialize()?;
                debug!("StartServiceByName({}) returned {}", service, outcome);
                Ok(())
            }
            Err(zbus::Error::MethodError(name, detail, _)) => {
                debug!(
                    "Activation of {} failed: {} {}",
                    service,
                    name.as_str(),
                    detail.unwrap_or_default()
                );
                Err(BusError::ServiceUnknown {
                    service: service.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Local stand-in for an object exported on the session bus.
pub struct RemoteObject<'a> {
    bus: &'a SessionBus,
    service: String,
    destination: String,
    path: String,
    interface: Option<String>,
}

impl RemoteObject<'_> {
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Unique name the calls are sent to.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Call `method` with a single string argument and wait for the reply.
    pub fn call(&self, method: &str, argument: &str) -> Result<Reply, BusError> {
        validate_name(NameKind::Method, method)?;

        let target = CallTarget {
            service: &self.service,
            path: &self.path,
            method,
        };

        debug!("Calling {}.{}({:?})", self.path, method, argument);
        let message = self
            .bus
            .connection
            .call_method(
                Some(self.destination.as_str()),
                self.path.as_str(),
                self.interface.as_deref(),
                method,
                &(argument,),
            )
            .map_err(|e| BusError::from_call(e, target))?;

        Reply::from_message(&message)
    }
}

impl MethodCall for RemoteObject<'_> {
    fn call(&self, method: &str, argument: &str) -> Result<Reply, BusError> {
        RemoteObject::call(self, method, argument)
    }
}

/// Check a bus identifier before it goes on the wire.
pub(crate) fn validate_name(kind: NameKind, value: &str) -> Result<(), BusError> {
    let checked = match kind {
        NameKind::Service => BusName::try_from(value).map(drop).map_err(|e| e.to_string()),
        NameKind::ObjectPath => ObjectPath::try_from(value).map(drop).map_err(|e| e.to_string()),
        NameKind::Interface => InterfaceName::try_from(value)
            .map(drop)
            .map_err(|e| e.to_string()),
        NameKind::Method => MemberName::try_from(value).map(drop).map_err(|e| e.to_string()),
    };

    checked.map_err(|reason| BusError::InvalidName {
        kind,
        value: value.to_string(),
        reason,
    })
}
