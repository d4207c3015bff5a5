//! Common assertion helpers for test output validation
//!
//! Provides predicates for the messages and zone listings printed by
//! git-sandbox.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for a success line
pub fn success(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✓ {message}"))
}

/// Creates a predicate that checks for an error line
pub fn error(message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("✕ Error: {message}"))
}

/// Creates a predicate that checks all four zone headers are present
pub fn has_all_zones() -> impl Predicate<str> {
    predicates::str::contains("➤ Working Directory:")
        .and(predicates::str::contains("➤ Staging Area:"))
        .and(predicates::str::contains("➤ Local Repository:"))
        .and(predicates::str::contains("➤ Remote Repository:"))
}

/// Creates a predicate that checks for a numbered file line
pub fn has_file(index: u32, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {name}"))
}

/// Creates a predicate that checks for a commit header
pub fn has_commit(id: u64) -> impl Predicate<str> {
    predicates::str::contains(format!("Commit {id} #{id:06}"))
}

/// Creates a predicate that checks for a suggested command
pub fn suggests(command: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("$ {command}"))
}
