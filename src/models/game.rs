//! Game title a tournament is organized around.

use crate::models::category::Category;
use crate::models::error::DomainError;
use serde::Serialize;
use std::fmt;

/// A game (title) linked to a category.
///
/// Name and category never change after creation; a game referenced by a
/// tournament stays valid for the tournament's whole lifetime.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Game {
    name: String,
    category: Category,
}

impl Game {
    /// Create a game. The name must not be blank.
    pub fn new(name: impl Into<String>, category: Category) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidArgument(
                "game name must not be blank".into(),
            ));
        }
        Ok(Self {
            name: trimmed.to_string(),
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.category)
    }
}
