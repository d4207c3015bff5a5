//! Consolidated test utilities for git-sandbox
//!
//! This module provides unified testing utilities for integration tests that
//! drive the real binary against an isolated session and config file.

pub mod assertions;
pub mod fixtures;
