//! Error type shared by all entity and registry operations.

use std::fmt;

/// Errors that can occur during tournament-system operations.
///
/// Exactly three kinds, so callers can tell malformed input, business-rule
/// violations, and failed name lookups apart without parsing messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DomainError {
    /// Malformed or missing input: blank name, equal teams for a match.
    InvalidArgument(String),
    /// Well-formed input that violates a business rule given current data,
    /// e.g. a player who already belongs to another team.
    InvalidState(String),
    /// A name or id did not resolve to any stored entity.
    NotFound(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            DomainError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            DomainError::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
