//! In-memory repository layer: name-keyed stores and the flat operation API
//! the console layer calls.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    name_key, Category, DomainError, Game, Match, MatchId, Player, PlayerId, Referee, RefereeId,
    Team, Tournament,
};

/// In-memory stores for the whole system.
///
/// Teams, tournaments, and games are keyed by normalized (trimmed,
/// lowercased) name, which is what makes uniqueness and lookups
/// case-insensitive. Players and referees live in id-keyed arenas so they
/// outlive roster removals and team deletions. Single-threaded by design;
/// wrap the whole registry in a lock if shared access is ever needed.
#[derive(Debug, Default)]
pub struct Registry {
    teams: HashMap<String, Team>,
    tournaments: HashMap<String, Tournament>,
    games: HashMap<String, Game>,
    players: HashMap<PlayerId, Player>,
    referees: HashMap<RefereeId, Referee>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- creation ----

    /// Create and store a team. Fails if the name is blank or already used
    /// (ignoring case and padding).
    pub fn create_team(&mut self, name: &str) -> Result<&Team, DomainError> {
        let team = Team::new(name)?;
        let key = name_key(name);
        if self.teams.contains_key(&key) {
            return Err(DomainError::InvalidArgument(format!(
                "a team named '{}' already exists",
                name.trim()
            )));
        }
        Ok(self.teams.entry(key).or_insert(team))
    }

    /// Categories are plain values without a catalog; nothing is stored.
    pub fn create_category(&self, name: &str, description: Option<String>) -> Category {
        Category::new(name, description)
    }

    /// Register a game. Idempotent: if a game with that name already exists
    /// it is returned unchanged, and the given category is not applied.
    pub fn create_game(&mut self, name: &str, category: Category) -> Result<&Game, DomainError> {
        let game = Game::new(name, category)?;
        Ok(self.games.entry(name_key(name)).or_insert(game))
    }

    /// Create a tournament for one already-registered game.
    pub fn create_tournament(
        &mut self,
        name: &str,
        organizer: &str,
        start_date: NaiveDate,
        game_name: &str,
    ) -> Result<&Tournament, DomainError> {
        let game = self
            .games
            .get(&name_key(game_name))
            .ok_or_else(|| not_found("game", game_name))?
            .clone();
        let tournament = Tournament::new(name, organizer, start_date, game)?;
        let key = name_key(name);
        if self.tournaments.contains_key(&key) {
            return Err(DomainError::InvalidArgument(format!(
                "a tournament named '{}' already exists",
                name.trim()
            )));
        }
        Ok(self.tournaments.entry(key).or_insert(tournament))
    }

    /// Create and store a referee, returning its id.
    pub fn create_referee(&mut self, first_name: &str, last_name: &str) -> Result<RefereeId, DomainError> {
        let referee = Referee::new(first_name, last_name)?;
        let id = referee.id();
        self.referees.insert(id, referee);
        Ok(id)
    }

    /// Create a player and add them to an existing team's roster.
    pub fn add_player_to_team(
        &mut self,
        team_name: &str,
        name: &str,
        alias: &str,
        ranking: u32,
    ) -> Result<PlayerId, DomainError> {
        let team = self
            .teams
            .get_mut(&name_key(team_name))
            .ok_or_else(|| not_found("team", team_name))?;
        let mut player = Player::new(name, alias, ranking)?;
        team.add_player(&mut player)?;
        let id = player.id();
        self.players.insert(id, player);
        Ok(id)
    }

    // ---- relationships ----

    /// Take a player off a team's roster. Returns false if the player was
    /// not on it. The player stays in the registry, free to join another
    /// team.
    pub fn remove_player_from_team(
        &mut self,
        team_name: &str,
        player: PlayerId,
    ) -> Result<bool, DomainError> {
        let team = self
            .teams
            .get_mut(&name_key(team_name))
            .ok_or_else(|| not_found("team", team_name))?;
        let player = self
            .players
            .get_mut(&player)
            .ok_or_else(|| DomainError::NotFound(format!("no player with id {player}")))?;
        Ok(team.remove_player(player))
    }

    /// Enroll a team in a tournament. Returns true if newly enrolled.
    pub fn enroll_team(
        &mut self,
        tournament_name: &str,
        team_name: &str,
    ) -> Result<bool, DomainError> {
        let team = self
            .teams
            .get(&name_key(team_name))
            .ok_or_else(|| not_found("team", team_name))?;
        let tournament = self
            .tournaments
            .get_mut(&name_key(tournament_name))
            .ok_or_else(|| not_found("tournament", tournament_name))?;
        Ok(tournament.enroll(team))
    }

    /// Withdraw a team from a tournament. Returns false if it was not
    /// enrolled.
    pub fn withdraw_team(
        &mut self,
        tournament_name: &str,
        team_name: &str,
    ) -> Result<bool, DomainError> {
        let team = self
            .teams
            .get(&name_key(team_name))
            .ok_or_else(|| not_found("team", team_name))?;
        let tournament = self
            .tournaments
            .get_mut(&name_key(tournament_name))
            .ok_or_else(|| not_found("tournament", tournament_name))?;
        Ok(tournament.withdraw(team))
    }

    /// Schedule a match in a tournament between two enrolled teams, with a
    /// mandatory referee. Returns a snapshot of the created match.
    pub fn schedule_match(
        &mut self,
        tournament_name: &str,
        date: NaiveDate,
        team1_name: &str,
        team2_name: &str,
        referee: RefereeId,
    ) -> Result<Match, DomainError> {
        let team1 = self
            .teams
            .get(&name_key(team1_name))
            .ok_or_else(|| not_found("team", team1_name))?;
        let team2 = self
            .teams
            .get(&name_key(team2_name))
            .ok_or_else(|| not_found("team", team2_name))?;
        let referee = self
            .referees
            .get_mut(&referee)
            .ok_or_else(|| DomainError::NotFound(format!("no referee with id {referee}")))?;
        let tournament = self
            .tournaments
            .get_mut(&name_key(tournament_name))
            .ok_or_else(|| not_found("tournament", tournament_name))?;
        tournament
            .schedule_match(date, team1, team2, referee)
            .map(Match::clone)
    }

    /// Cancel a match in a tournament. Returns whether it was present.
    pub fn cancel_match(
        &mut self,
        tournament_name: &str,
        id: MatchId,
    ) -> Result<bool, DomainError> {
        let tournament = self
            .tournaments
            .get_mut(&name_key(tournament_name))
            .ok_or_else(|| not_found("tournament", tournament_name))?;
        Ok(tournament.cancel_match(id))
    }

    /// Hand an existing match to a different referee. The new referee's
    /// history gains the match; the old referee's history is left alone.
    pub fn reassign_referee(
        &mut self,
        tournament_name: &str,
        match_id: MatchId,
        referee: RefereeId,
    ) -> Result<(), DomainError> {
        let referee = self
            .referees
            .get_mut(&referee)
            .ok_or_else(|| DomainError::NotFound(format!("no referee with id {referee}")))?;
        let tournament = self
            .tournaments
            .get_mut(&name_key(tournament_name))
            .ok_or_else(|| not_found("tournament", tournament_name))?;
        let m = tournament.match_mut(match_id).ok_or_else(|| {
            DomainError::NotFound(format!(
                "no match {match_id} in tournament '{}'",
                tournament_name.trim()
            ))
        })?;
        m.reassign_referee(referee);
        Ok(())
    }

    // ---- queries ----

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(&name_key(name))
    }

    pub fn tournament(&self, name: &str) -> Option<&Tournament> {
        self.tournaments.get(&name_key(name))
    }

    pub fn game(&self, name: &str) -> Option<&Game> {
        self.games.get(&name_key(name))
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn referee(&self, id: RefereeId) -> Option<&Referee> {
        self.referees.get(&id)
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn tournaments(&self) -> impl Iterator<Item = &Tournament> {
        self.tournaments.values()
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    /// Resolve a team's roster to player snapshots, in roster order.
    pub fn team_roster(&self, team_name: &str) -> Result<Vec<&Player>, DomainError> {
        let team = self
            .teams
            .get(&name_key(team_name))
            .ok_or_else(|| not_found("team", team_name))?;
        Ok(team
            .roster()
            .iter()
            .filter_map(|id| self.players.get(id))
            .collect())
    }

    /// Serializable snapshot of the whole system, sorted by name for
    /// stable output.
    pub fn summary(&self) -> Summary {
        let mut games: Vec<GameSummary> = self
            .games
            .values()
            .map(|g| GameSummary {
                name: g.name().to_string(),
                category: g.category().to_string(),
            })
            .collect();
        games.sort();

        let mut teams: Vec<TeamSummary> = self
            .teams
            .values()
            .map(|t| TeamSummary {
                name: t.name().to_string(),
                players: t.roster().len(),
            })
            .collect();
        teams.sort();

        let mut tournaments: Vec<TournamentSummary> = self
            .tournaments
            .values()
            .map(|t| TournamentSummary {
                name: t.name().to_string(),
                game: t.game().name().to_string(),
                teams: t.enrolled_teams().len(),
                matches: t.matches().len(),
            })
            .collect();
        tournaments.sort();

        Summary {
            games,
            teams,
            tournaments,
        }
    }
}

/// Snapshot of everything registered, for display or JSON dumps.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub games: Vec<GameSummary>,
    pub teams: Vec<TeamSummary>,
    pub tournaments: Vec<TournamentSummary>,
}

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct GameSummary {
    pub name: String,
    pub category: String,
}

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub players: usize,
}

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TournamentSummary {
    pub name: String,
    pub game: String,
    pub teams: usize,
    pub matches: usize,
}

fn not_found(kind: &str, name: &str) -> DomainError {
    DomainError::NotFound(format!("no {kind} named '{}'", name.trim()))
}
