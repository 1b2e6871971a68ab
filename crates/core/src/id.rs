// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Correlation identifiers.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Correlation key for one logical attempt.
///
/// Stable across orchestrator retries of the same attempt, so it keys the
/// attempt counter. It never deduplicates results.
///
/// Generated ids have the form `inv-{nanoid}` and key a single `cordon run`
/// when the caller names none; ids supplied through `from_string` are used
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationId(SmolStr);

impl InvocationId {
    pub const PREFIX: &'static str = "inv-";

    /// Generate a new random ID with the type prefix
    pub fn new() -> Self {
        Self(SmolStr::new(format!("{}{}", Self::PREFIX, nanoid::nanoid!(19))))
    }

    /// Create ID from existing string (for parsing/deserialization)
    pub fn from_string(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvocationId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for InvocationId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl PartialEq<str> for InvocationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::borrow::Borrow<str> for InvocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
