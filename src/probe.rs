// Ganesha D-Bus Probe - Probes
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Preset remote calls against the NFS-Ganesha session bus endpoints.
//!
//! A probe connects to the session bus, resolves one object, calls one
//! method with one string argument and hands back the reply. There is no
//! retry; every failure is returned to the caller. The targets are
//! literals and cannot be changed at run time.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::bus::{paths, BusError, BusSetup, MethodCall, SessionBus, BUS_NAME};
use crate::models::Reply;

/// One preset remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub name: &'static str,
    pub service: &'static str,
    pub path: &'static str,
    /// Interface to address; `None` leaves it out of the call.
    pub interface: Option<&'static str>,
    pub method: &'static str,
    pub argument: &'static str,
}

impl Probe {
    /// Callback simulator probe: asks for the client ids.
    pub const CBSIM: Probe = Probe {
        name: "cbsim",
        service: BUS_NAME,
        path: paths::CBSIM,
        interface: None,
        method: "method1",
        argument: "GETCLIENTIDS",
    };

    /// MATT1 endpoint probe.
    pub const MATT1: Probe = Probe {
        name: "matt1",
        service: BUS_NAME,
        path: paths::MATT1,
        interface: None,
        method: "method2",
        argument: "MaGiC",
    };

    pub fn cbsim() -> Self {
        Self::CBSIM
    }

    pub fn matt1() -> Self {
        Self::MATT1
    }

    /// Issue the probe's single call against `target`.
    pub fn invoke<T: MethodCall + ?Sized>(&self, target: &T) -> Result<Reply, BusError> {
        info!(
            "Probe {}: calling {} on {}{}",
            self.name, self.method, self.service, self.path
        );
        let reply = target.call(self.method, self.argument)?;
        info!("Probe {}: reply signature '{}'", self.name, reply.signature);
        Ok(reply)
    }

    /// Call `target` once and write the reply line to `out`.
    ///
    /// Nothing is written when the call fails.
    pub fn print_reply<T, W>(&self, target: &T, out: &mut W) -> anyhow::Result<()>
    where
        T: MethodCall + ?Sized,
        W: Write,
    {
        let reply = self
            .invoke(target)
            .with_context(|| format!("probe {} failed", self.name))?;
        writeln!(out, "{reply}").context("failed to write reply")?;
        out.flush().context("failed to write reply")?;
        Ok(())
    }

    /// Connect to the session bus, run the probe and print the reply.
    pub fn run<W: Write>(&self, setup: &BusSetup, out: &mut W) -> anyhow::Result<()> {
        let bus = SessionBus::connect(setup)
            .with_context(|| format!("probe {} failed", self.name))?;
        let object = bus
            .object(self.service, self.path, self.interface)
            .with_context(|| format!("probe {} failed", self.name))?;
        self.print_reply(&object, out)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Stub object that records every call it receives.
    struct StubObject {
        path: &'static str,
        method: &'static str,
        reply: Reply,
        calls: Cell<usize>,
        arguments: RefCell<Vec<String>>,
    }

    impl StubObject {
        fn new(path: &'static str, method: &'static str, reply: &str) -> Self {
            Self {
                path,
                method,
                reply: Reply::text(reply),
                calls: Cell::new(0),
                arguments: RefCell::new(Vec::new()),
            }
        }
    }

    impl MethodCall for StubObject {
        fn call(&self, method: &str, argument: &str) -> Result<Reply, BusError> {
            self.calls.set(self.calls.get() + 1);
            self.arguments.borrow_mut().push(argument.to_string());
            if method != self.method {
                return Err(BusError::MethodUnknown {
                    path: self.path.to_string(),
                    method: method.to_string(),
                });
            }
            Ok(self.reply.clone())
        }
    }

    /// Stands in for a path nothing is exported at.
    struct MissingObject {
        calls: Cell<usize>,
    }

    impl MethodCall for MissingObject {
        fn call(&self, _method: &str, _argument: &str) -> Result<Reply, BusError> {
            self.calls.set(self.calls.get() + 1);
            Err(BusError::ObjectNotFound {
                service: BUS_NAME.to_string(),
                path: "/org/ganesha/nfsd/GONE".to_string(),
            })
        }
    }

    #[test]
    fn test_cbsim_prints_stub_reply() {
        let stub = StubObject::new(paths::CBSIM, "method1", "clientid 0x1f, 0x20");
        let reply = Probe::cbsim().invoke(&stub).unwrap();

        assert_eq!(reply.to_string(), "clientid 0x1f, 0x20");
        assert_eq!(stub.calls.get(), 1);
        assert_eq!(*stub.arguments.borrow(), vec!["GETCLIENTIDS".to_string()]);
    }

    #[test]
    fn test_matt1_prints_stub_reply() {
        let stub = StubObject::new(paths::MATT1, "method2", "magic accepted");
        let reply = Probe::matt1().invoke(&stub).unwrap();

        assert_eq!(reply.to_string(), "magic accepted");
        assert_eq!(stub.calls.get(), 1);
        assert_eq!(*stub.arguments.borrow(), vec!["MaGiC".to_string()]);
    }

    #[test]
    fn test_missing_object_is_reported_once() {
        let missing = MissingObject { calls: Cell::new(0) };
        let err = Probe::cbsim().invoke(&missing).unwrap_err();

        assert!(matches!(err, BusError::ObjectNotFound { .. }));
        assert_eq!(missing.calls.get(), 1);
    }

    #[test]
    fn test_wrong_method_is_not_retried() {
        let stub = StubObject::new(paths::CBSIM, "method1", "unused");
        let probe = Probe::matt1();
        let err = probe.invoke(&stub).unwrap_err();

        assert!(matches!(err, BusError::MethodUnknown { ref method, .. } if method == "method2"));
        assert_eq!(stub.calls.get(), 1);
    }

    #[test]
    fn test_presets() {
        let cbsim = Probe::cbsim();
        assert_eq!(cbsim.service, "org.ganesha.nfsd");
        assert_eq!(cbsim.path, "/org/ganesha/nfsd/CBSIM");
        assert_eq!(cbsim.method, "method1");
        assert_eq!(cbsim.argument, "GETCLIENTIDS");
        assert!(cbsim.interface.is_none());

        let matt1 = Probe::matt1();
        assert_eq!(matt1.service, "org.ganesha.nfsd");
        assert_eq!(matt1.path, "/org/ganesha/nfsd/MATT1");
        assert_eq!(matt1.method, "method2");
        assert_eq!(matt1.argument, "MaGiC");
        assert!(matt1.interface.is_none());
    }

    #[test]
    fn test_print_reply_writes_one_line() {
        let stub = StubObject::new(paths::CBSIM, "method1", "clientid 0x1f");
        let mut out = Vec::new();
        Probe::cbsim().print_reply(&stub, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "clientid 0x1f\n");
        assert_eq!(stub.calls.get(), 1);
    }

    #[test]
    fn test_print_reply_writes_nothing_on_failure() {
        let missing = MissingObject { calls: Cell::new(0) };
        let mut out = Vec::new();
        let err = Probe::matt1().print_reply(&missing, &mut out).unwrap_err();

        assert!(out.is_empty());
        assert_eq!(err.to_string(), "probe matt1 failed");
        assert!(matches!(
            err.downcast_ref::<BusError>(),
            Some(BusError::ObjectNotFound { .. })
        ));
    }
}
