//! Referee identity and supervised-match history.

use crate::models::error::DomainError;
use crate::models::game_match::MatchId;
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a referee.
pub type RefereeId = Uuid;

/// A referee who supervises matches.
///
/// The history is an append-only audit log in assignment order: it records
/// every match ever assigned to this referee and never shrinks, not even
/// when a match is cancelled or handed to a different referee.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Referee {
    id: RefereeId,
    first_name: String,
    last_name: String,
    history: Vec<MatchId>,
}

impl Referee {
    /// Create a referee. Both name parts must not be blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "referee first and last name must not be blank".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            history: Vec::new(),
        })
    }

    pub fn id(&self) -> RefereeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Read-only view of supervised matches, oldest first.
    pub fn history(&self) -> &[MatchId] {
        &self.history
    }

    /// Called by `Match` when this referee is assigned; never independently.
    pub(crate) fn record_assignment(&mut self, id: MatchId) {
        self.history.push(id);
    }
}
