//! Category (genre) of a game, e.g. MOBA, FPS, Sports.

use serde::Serialize;
use std::fmt;

/// Lightweight classification attached to a [`Game`](crate::models::Game).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Category {
    name: String,
    description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{} ({desc})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
