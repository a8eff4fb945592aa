//! Common test utilities for emproj CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project tree with a manifest and a stub `emcc`
//! - `TestResult`: Captured output of one CLI run

#![allow(dead_code)]

pub mod env;

pub use env::*;
