//! Common test utilities for Billboard CLI tests.
//!
//! - `TestEnv`: isolated working, home and data directories
//! - `TestResult`: captured output with NDJSON helpers

#![allow(dead_code)]

pub mod env;

pub use env::*;
