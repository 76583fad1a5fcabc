//! Integration tests for the registry: name-keyed stores, case-insensitive
//! uniqueness, and the flat operation API.

use chrono::NaiveDate;
use esports_tournament::{Category, DomainError, Registry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn strategy() -> Category {
    Category::new("Strategy", None)
}

/// Registry primed with the pieces most tests need: two enrolled teams,
/// one game, one tournament.
fn cup_registry() -> Registry {
    let mut r = Registry::new();
    r.create_team("Fox").unwrap();
    r.create_team("Raptors").unwrap();
    r.create_game("Chess", strategy()).unwrap();
    r.create_tournament("Cup", "FIA", date(2025, 9, 30), "Chess")
        .unwrap();
    assert!(r.enroll_team("Cup", "Fox").unwrap());
    assert!(r.enroll_team("Cup", "Raptors").unwrap());
    r
}

#[test]
fn team_names_are_unique_ignoring_case_and_padding() {
    let mut r = Registry::new();
    r.create_team("Fox").unwrap();
    for duplicate in ["fox ", "FOX", " Fox"] {
        let err = r.create_team(duplicate).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
    assert_eq!(r.teams().count(), 1);
}

#[test]
fn blank_team_name_is_rejected() {
    let mut r = Registry::new();
    assert!(matches!(
        r.create_team("  "),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn create_game_is_idempotent_and_keeps_the_first_category() {
    let mut r = Registry::new();
    r.create_game("Chess", strategy()).unwrap();
    let again = r
        .create_game("chess ", Category::new("Board", None))
        .unwrap();
    assert_eq!(again.category().name(), "Strategy");
    assert_eq!(r.games().count(), 1);
}

#[test]
fn tournament_requires_a_registered_game() {
    let mut r = Registry::new();
    let err = r
        .create_tournament("Cup", "FIA", date(2025, 9, 30), "Chess")
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn tournament_names_are_unique() {
    let mut r = cup_registry();
    let err = r
        .create_tournament("cup", "Someone", date(2025, 10, 5), "Chess")
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));
}

#[test]
fn players_join_teams_through_the_registry() {
    let mut r = cup_registry();
    let ana = r.add_player_to_team("Fox", "Ana", "AnaX", 1800).unwrap();
    r.add_player_to_team("fox", "Sofia", "Sofi", 1820).unwrap();

    let roster = r.team_roster("Fox").unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].alias(), "AnaX");
    let fox_id = r.team("Fox").unwrap().id();
    assert_eq!(r.player(ana).unwrap().team(), Some(fox_id));

    let err = r
        .add_player_to_team("Ghosts", "Max", "Mx", 1500)
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn removed_players_survive_and_lose_their_team() {
    let mut r = cup_registry();
    let ana = r.add_player_to_team("Fox", "Ana", "AnaX", 1800).unwrap();

    assert!(r.remove_player_from_team("Fox", ana).unwrap());
    assert!(r.team_roster("Fox").unwrap().is_empty());
    assert_eq!(r.player(ana).unwrap().team(), None);
    assert!(!r.remove_player_from_team("Fox", ana).unwrap());
}

#[test]
fn full_scheduling_scenario() {
    let mut r = cup_registry();
    let referee = r.create_referee("Ana", "Lopez").unwrap();

    let m = r
        .schedule_match("Cup", date(2025, 10, 1), "Fox", "Raptors", referee)
        .unwrap();
    assert_eq!(m.game().name(), "Chess");
    assert_eq!(m.team1(), r.team("Fox").unwrap().id());
    assert_eq!(m.team2(), r.team("Raptors").unwrap().id());
    assert_eq!(m.referee(), referee);

    assert_eq!(r.tournament("Cup").unwrap().matches().len(), 1);
    let history = r.referee(referee).unwrap().history();
    assert_eq!(history, [m.id()]);
}

#[test]
fn scheduling_against_an_unenrolled_team_fails_cleanly() {
    let mut r = cup_registry();
    r.create_team("Ghosts").unwrap();
    let referee = r.create_referee("Ana", "Lopez").unwrap();

    let err = r
        .schedule_match("Cup", date(2025, 10, 1), "Fox", "Ghosts", referee)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
    assert!(r.tournament("Cup").unwrap().matches().is_empty());
    assert!(r.referee(referee).unwrap().history().is_empty());

    // A team that was never created is a lookup failure, not a rule
    // violation.
    let err = r
        .schedule_match("Cup", date(2025, 10, 1), "Fox", "Phantoms", referee)
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn enrollment_via_registry_is_idempotent() {
    let mut r = cup_registry();
    r.create_team("Ghosts").unwrap();
    assert!(r.enroll_team("Cup", "Ghosts").unwrap());
    assert!(!r.enroll_team("Cup", "ghosts ").unwrap());
    assert_eq!(r.tournament("Cup").unwrap().enrolled_teams().len(), 3);
}

#[test]
fn withdraw_via_registry() {
    let mut r = cup_registry();
    assert!(r.withdraw_team("Cup", "fox").unwrap());
    assert!(!r.withdraw_team("Cup", "Fox").unwrap());
    let err = r.withdraw_team("Nope", "Fox").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn cancel_match_via_registry() {
    let mut r = cup_registry();
    let referee = r.create_referee("Ana", "Lopez").unwrap();
    let m = r
        .schedule_match("Cup", date(2025, 10, 1), "Fox", "Raptors", referee)
        .unwrap();

    assert!(r.cancel_match("Cup", m.id()).unwrap());
    assert!(!r.cancel_match("Cup", m.id()).unwrap());
    assert!(r.tournament("Cup").unwrap().matches().is_empty());
    // Supervision already happened; the audit log keeps it.
    assert_eq!(r.referee(referee).unwrap().history(), [m.id()]);
}

#[test]
fn reassigning_a_referee_appends_to_the_new_history_only() {
    let mut r = cup_registry();
    let first = r.create_referee("Ana", "Lopez").unwrap();
    let second = r.create_referee("Carlos", "Mena").unwrap();
    let m = r
        .schedule_match("Cup", date(2025, 10, 1), "Fox", "Raptors", first)
        .unwrap();

    r.reassign_referee("Cup", m.id(), second).unwrap();

    let current = &r.tournament("Cup").unwrap().matches()[0];
    assert_eq!(current.referee(), second);
    assert_eq!(r.referee(second).unwrap().history(), [m.id()]);
    // The old referee's entry is never removed.
    assert_eq!(r.referee(first).unwrap().history(), [m.id()]);

    let err = r.reassign_referee("Cup", m.id(), uuid::Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn reassigning_the_current_referee_leaves_the_history_alone() {
    let mut r = cup_registry();
    let referee = r.create_referee("Ana", "Lopez").unwrap();
    let m = r
        .schedule_match("Cup", date(2025, 10, 1), "Fox", "Raptors", referee)
        .unwrap();

    r.reassign_referee("Cup", m.id(), referee).unwrap();

    assert_eq!(r.tournament("Cup").unwrap().matches()[0].referee(), referee);
    assert_eq!(r.referee(referee).unwrap().history(), [m.id()]);
}

#[test]
fn summary_counts_everything() {
    let mut r = cup_registry();
    r.add_player_to_team("Fox", "Ana", "AnaX", 1800).unwrap();
    let referee = r.create_referee("Ana", "Lopez").unwrap();
    r.schedule_match("Cup", date(2025, 10, 1), "Fox", "Raptors", referee)
        .unwrap();

    let summary = r.summary();
    assert_eq!(summary.games.len(), 1);
    assert_eq!(summary.teams.len(), 2);
    assert_eq!(summary.tournaments.len(), 1);
    assert_eq!(summary.teams[0].name, "Fox");
    assert_eq!(summary.teams[0].players, 1);
    assert_eq!(summary.tournaments[0].game, "Chess");
    assert_eq!(summary.tournaments[0].teams, 2);
    assert_eq!(summary.tournaments[0].matches, 1);
}
