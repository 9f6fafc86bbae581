// Ganesha D-Bus Probe - Binary Tests
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Runs the built binaries against the session bus of the test run.

use std::process::Command;

fn assert_fails_quietly(binary: &str) {
    let output = Command::new(binary)
        .env("RUST_LOG", "off")
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(1), "status: {:?}", output.status);
    assert!(
        output.stdout.is_empty(),
        "unexpected stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("org.ganesha.nfsd"), "stderr: {stderr}");
}

#[test]
#[ignore = "requires a session bus without org.ganesha.nfsd"]
fn test_cbsim_exits_nonzero_without_service() {
    assert_fails_quietly(env!("CARGO_BIN_EXE_cbsim-probe"));
}

#[test]
#[ignore = "requires a session bus without org.ganesha.nfsd"]
fn test_matt1_exits_nonzero_without_service() {
    assert_fails_quietly(env!("CARGO_BIN_EXE_matt1-probe"));
}
