//! Data structures for the tournament system: teams, players, games,
//! referees, matches, and tournaments.

mod category;
mod error;
mod game;
mod game_match;
mod player;
mod referee;
mod team;
mod tournament;

pub use category::Category;
pub use error::DomainError;
pub use game::Game;
pub use game_match::{Match, MatchId};
pub use player::{Player, PlayerId};
pub use referee::{Referee, RefereeId};
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentId};

/// Normalized identity key for names: trimmed and lowercased, so lookups
/// and uniqueness checks ignore case and padding.
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
