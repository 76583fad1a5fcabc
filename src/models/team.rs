//! Team and its roster controller.

use crate::models::error::DomainError;
use crate::models::player::{Player, PlayerId};
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// A team with a unique name and an ordered roster of players.
///
/// The roster methods are the single mutation point for the bidirectional
/// team/player link: `Player` exposes no public team setter, so the roster
/// and every back-reference always agree. Name uniqueness across the system
/// is enforced by the registry. A team does not own its players' lifetime;
/// removing a team leaves the players available for other teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Team {
    id: TeamId,
    name: String,
    roster: Vec<PlayerId>,
}

impl Team {
    /// Create an empty team. The name must not be blank.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidArgument(
                "team name must not be blank".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            roster: Vec::new(),
        })
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a player to the roster and point the player back at this team.
    ///
    /// No-op if the player is already on this team; fails with
    /// `InvalidState` if the player belongs to a different team.
    pub fn add_player(&mut self, player: &mut Player) -> Result<(), DomainError> {
        match player.team() {
            Some(current) if current == self.id => Ok(()),
            Some(_) => Err(DomainError::InvalidState(format!(
                "player '{}' already belongs to another team",
                player.alias()
            ))),
            None => {
                self.roster.push(player.id());
                player.set_team(Some(self.id));
                Ok(())
            }
        }
    }

    /// Remove a player from the roster, clearing their back-reference.
    /// Returns false if the player was not on this team.
    pub fn remove_player(&mut self, player: &mut Player) -> bool {
        let Some(pos) = self.roster.iter().position(|id| *id == player.id()) else {
            return false;
        };
        self.roster.remove(pos);
        player.set_team(None);
        true
    }

    /// Read-only ordered view of the roster.
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }
}
