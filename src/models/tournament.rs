//! Tournament: one game, enrolled teams, and the matches it owns.

use crate::models::error::DomainError;
use crate::models::game::Game;
use crate::models::game_match::{Match, MatchId};
use crate::models::name_key;
use crate::models::referee::Referee;
use crate::models::team::Team;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A tournament for exactly one game.
///
/// The tournament owns its matches (cancelling the tournament takes the
/// matches with it) but only associates with teams: enrolled teams keep
/// living in the registry when the tournament goes away. The enrolled set
/// never holds duplicates, and the game is fixed for the tournament's
/// whole lifetime.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tournament {
    id: TournamentId,
    name: String,
    organizer: String,
    start_date: NaiveDate,
    game: Game,
    /// Display names of enrolled teams; identity is the normalized name.
    enrolled: Vec<String>,
    matches: Vec<Match>,
}

impl Tournament {
    /// Create an empty tournament. Name and organizer must not be blank.
    pub fn new(
        name: impl Into<String>,
        organizer: impl Into<String>,
        start_date: NaiveDate,
        game: Game,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let organizer = organizer.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "tournament name must not be blank".into(),
            ));
        }
        if organizer.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "tournament organizer must not be blank".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            organizer: organizer.trim().to_string(),
            start_date,
            game,
            enrolled: Vec::new(),
            matches: Vec::new(),
        })
    }

    pub fn id(&self) -> TournamentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Enroll a team. Returns true if newly added, false if already
    /// enrolled. Like everywhere else, "the same team" means the same
    /// normalized name.
    pub fn enroll(&mut self, team: &Team) -> bool {
        if self.is_enrolled(team) {
            return false;
        }
        self.enrolled.push(team.name().to_string());
        true
    }

    /// Withdraw a team. Returns false if the team was not enrolled.
    /// Matches already scheduled against the team stay untouched.
    pub fn withdraw(&mut self, team: &Team) -> bool {
        let key = name_key(team.name());
        let before = self.enrolled.len();
        self.enrolled.retain(|name| name_key(name) != key);
        self.enrolled.len() < before
    }

    pub fn is_enrolled(&self, team: &Team) -> bool {
        let key = name_key(team.name());
        self.enrolled.iter().any(|name| name_key(name) == key)
    }

    /// Schedule a match between two distinct, enrolled teams.
    ///
    /// The match plays this tournament's game and the referee's history
    /// gains the match. All validation happens before any state changes,
    /// so a failed call leaves the tournament and referee as they were.
    /// Enrollment is checked now only; a later withdrawal does not
    /// invalidate the match.
    pub fn schedule_match(
        &mut self,
        date: NaiveDate,
        team1: &Team,
        team2: &Team,
        referee: &mut Referee,
    ) -> Result<&Match, DomainError> {
        // Identity is the unique team name; checked before enrollment so
        // equal teams fail with InvalidArgument regardless of enrollment.
        if name_key(team1.name()) == name_key(team2.name()) {
            return Err(DomainError::InvalidArgument(format!(
                "a match needs two distinct teams, got '{}' twice",
                team1.name()
            )));
        }
        for team in [team1, team2] {
            if !self.is_enrolled(team) {
                return Err(DomainError::InvalidState(format!(
                    "team '{}' is not enrolled in tournament '{}'",
                    team.name(),
                    self.name
                )));
            }
        }
        let m = Match::new(date, team1, team2, self.game.clone(), referee)?;
        let idx = self.matches.len();
        self.matches.push(m);
        Ok(&self.matches[idx])
    }

    /// Cancel a match. Returns whether the match was present. The referee's
    /// history keeps its record of the match.
    pub fn cancel_match(&mut self, id: MatchId) -> bool {
        let before = self.matches.len();
        self.matches.retain(|m| m.id() != id);
        self.matches.len() < before
    }

    /// Read-only view of enrolled team names, in enrollment order.
    pub fn enrolled_teams(&self) -> &[String] {
        &self.enrolled
    }

    /// Read-only view of scheduled matches, in scheduling order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Mutable match lookup for referee reassignment; registry-internal.
    pub(crate) fn match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id() == id)
    }
}
