//! Player identity and ranking; team membership is managed by `Team`.

use crate::models::error::DomainError;
use crate::models::team::TeamId;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a player (used in rosters and lookups).
pub type PlayerId = Uuid;

/// A player: legal name, public alias, editable ranking, and a back-reference
/// to the team that currently holds them (at most one at any instant).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    alias: String,
    ranking: u32,
    /// Kept consistent exclusively by `Team::add_player` / `Team::remove_player`.
    team: Option<TeamId>,
}

impl Player {
    /// Create a new player with no team. Name and alias must not be blank.
    pub fn new(
        name: impl Into<String>,
        alias: impl Into<String>,
        ranking: u32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let alias = alias.into();
        if name.trim().is_empty() || alias.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "player name and alias must not be blank".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            alias,
            ranking,
            team: None,
        })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn ranking(&self) -> u32 {
        self.ranking
    }

    /// Ranking is the one editable metric on a player.
    pub fn set_ranking(&mut self, ranking: u32) {
        self.ranking = ranking;
    }

    /// The team this player currently belongs to, if any.
    pub fn team(&self) -> Option<TeamId> {
        self.team
    }

    /// Only the roster methods on `Team` may call this.
    pub(crate) fn set_team(&mut self, team: Option<TeamId>) {
        self.team = team;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.alias, self.name)
    }
}
