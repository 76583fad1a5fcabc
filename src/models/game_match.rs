//! A scheduled match between two enrolled teams.

use crate::models::error::DomainError;
use crate::models::game::Game;
use crate::models::name_key;
use crate::models::referee::{Referee, RefereeId};
use crate::models::team::{Team, TeamId};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A match between two distinct teams, played on the owning tournament's
/// game. Everything is fixed at creation except the referee, who can be
/// replaced; a match always has a referee.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Match {
    id: MatchId,
    date: NaiveDate,
    team1: TeamId,
    team2: TeamId,
    game: Game,
    referee: RefereeId,
}

impl Match {
    /// The single validated construction path, called by
    /// `Tournament::schedule_match` with the tournament's own game.
    /// Registers the match in the referee's history as a side effect.
    pub(crate) fn new(
        date: NaiveDate,
        team1: &Team,
        team2: &Team,
        game: Game,
        referee: &mut Referee,
    ) -> Result<Self, DomainError> {
        if name_key(team1.name()) == name_key(team2.name()) {
            return Err(DomainError::InvalidArgument(format!(
                "a match needs two distinct teams, got '{}' twice",
                team1.name()
            )));
        }
        let m = Self {
            id: Uuid::new_v4(),
            date,
            team1: team1.id(),
            team2: team2.id(),
            game,
            referee: referee.id(),
        };
        referee.record_assignment(m.id);
        Ok(m)
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn team1(&self) -> TeamId {
        self.team1
    }

    pub fn team2(&self) -> TeamId {
        self.team2
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn referee(&self) -> RefereeId {
        self.referee
    }

    /// Hand the match to a different referee. The new referee's history
    /// gains this match; the old referee's history keeps its entry.
    /// Reassigning to the current referee changes nothing.
    pub fn reassign_referee(&mut self, referee: &mut Referee) {
        if self.referee == referee.id() {
            return;
        }
        self.referee = referee.id();
        referee.record_assignment(self.id);
    }
}
