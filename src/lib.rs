//! Esports tournament organizer: entities, invariants, and the in-memory
//! registry. The console binary is a thin caller; all rules live here.

pub mod models;
pub mod registry;

pub use models::{
    Category, DomainError, Game, Match, MatchId, Player, PlayerId, Referee, RefereeId, Team,
    TeamId, Tournament, TournamentId,
};
pub use registry::{Registry, Summary};
