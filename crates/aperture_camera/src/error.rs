// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for fixtures and profiles.

use crate::fixture::FixtureKind;

/// Error when building a fixture from a kind, a command or structured data
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    /// Not enough command arguments
    #[error("Too few arguments: expected at least {expected}, got {got}")]
    TooFewArguments {
        /// Minimum number of arguments
        expected: usize,
        /// Number of arguments given
        got: usize,
    },

    /// Unrecognized fixture type name or tag
    #[error("Unknown fixture type: '{0}'")]
    UnknownType(String),

    /// Duration is not a whole number of ticks of at least 1
    #[error("Invalid duration: '{0}' (expected a whole number of ticks, at least 1)")]
    InvalidDuration(String),

    /// A variant specific argument could not be parsed
    #[error("Invalid argument '{token}' for {kind} fixture")]
    InvalidArgument {
        /// Fixture being built
        kind: FixtureKind,
        /// Offending token
        token: String,
    },

    /// Structured data lacks a required field
    #[error("Missing field '{0}' in fixture data")]
    MissingField(&'static str),

    /// Structured data has fields of the wrong shape
    #[error("Malformed fixture data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Error when accessing a fixture by index
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Fixture index {index} out of bounds (count {count})")]
pub struct BoundsError {
    /// Requested index
    pub index: usize,
    /// Number of fixtures in the profile
    pub count: usize,
}

/// Error when (de)serializing a whole profile
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// RON serialization failed
    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),

    /// RON text could not be parsed
    #[error("RON syntax error: {0}")]
    RonSyntax(#[from] ron::error::SpannedError),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
