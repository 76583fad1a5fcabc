//! Interactive console menu: a thin caller over the registry.
//! Run with: cargo run --bin console
//!
//! Every menu option maps to one registry operation; the loop only prompts,
//! dispatches, and prints. No business rules live here.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use esports_tournament::Registry;

/// The finite command set behind the numbered menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Quit,
    CreateTeam,
    AddPlayer,
    CreateGame,
    CreateTournament,
    EnrollTeam,
    ScheduleMatch,
    Summary,
}

impl Command {
    fn from_choice(choice: u32) -> Option<Self> {
        Some(match choice {
            0 => Command::Quit,
            1 => Command::CreateTeam,
            2 => Command::AddPlayer,
            3 => Command::CreateGame,
            4 => Command::CreateTournament,
            5 => Command::EnrollTeam,
            6 => Command::ScheduleMatch,
            7 => Command::Summary,
            _ => return None,
        })
    }
}

fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut registry = Registry::new();

    loop {
        println!();
        println!("=== Tournament System ===");
        println!("1) Create team");
        println!("2) Add player to team");
        println!("3) Create game");
        println!("4) Create tournament");
        println!("5) Enroll team in tournament");
        println!("6) Schedule match");
        println!("7) Summary");
        println!("0) Quit");

        let Some(line) = prompt(&mut input, "Choose an option") else {
            break;
        };
        let Some(command) = line.trim().parse().ok().and_then(Command::from_choice) else {
            println!("Unknown option: {}", line.trim());
            continue;
        };
        match command {
            Command::Quit => break,
            Command::CreateTeam => create_team(&mut registry, &mut input),
            Command::AddPlayer => add_player(&mut registry, &mut input),
            Command::CreateGame => create_game(&mut registry, &mut input),
            Command::CreateTournament => create_tournament(&mut registry, &mut input),
            Command::EnrollTeam => enroll_team(&mut registry, &mut input),
            Command::ScheduleMatch => schedule_match(&mut registry, &mut input),
            Command::Summary => summary(&registry),
        }
    }
    println!("Bye!");
}

fn create_team(registry: &mut Registry, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Team name") else {
        return;
    };
    match registry.create_team(&name) {
        Ok(team) => {
            log::info!("created team '{}'", team.name());
            println!("Team created: {}", team.name());
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn add_player(registry: &mut Registry, input: &mut impl BufRead) {
    let Some(team) = prompt(input, "Team name") else {
        return;
    };
    let Some(name) = prompt(input, "Player name") else {
        return;
    };
    let Some(alias) = prompt(input, "Alias") else {
        return;
    };
    let Some(ranking) = prompt_u32(input, "Ranking (0-4000)") else {
        return;
    };
    match registry.add_player_to_team(&team, &name, &alias, ranking) {
        Ok(id) => {
            log::info!("added player {id} to team '{team}'");
            println!("Player added to {}", team.trim());
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn create_game(registry: &mut Registry, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Game name") else {
        return;
    };
    let Some(category) = prompt(input, "Category (e.g. MOBA/FPS/Sports)") else {
        return;
    };
    let Some(description) = prompt(input, "Category description (may be empty)") else {
        return;
    };
    let description = match description.trim() {
        "" => None,
        d => Some(d.to_string()),
    };
    let category = registry.create_category(&category, description);
    match registry.create_game(&name, category) {
        Ok(game) => println!("Game registered: {game}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn create_tournament(registry: &mut Registry, input: &mut impl BufRead) {
    let Some(name) = prompt(input, "Tournament name") else {
        return;
    };
    let Some(organizer) = prompt(input, "Organizer") else {
        return;
    };
    let Some(date) = prompt_date(input, "Start date (yyyy-mm-dd)") else {
        return;
    };
    let Some(game) = prompt(input, "Game name") else {
        return;
    };
    match registry.create_tournament(&name, &organizer, date, &game) {
        Ok(t) => println!("Tournament created: {} / game: {}", t.name(), t.game().name()),
        Err(e) => println!("Error: {e}"),
    }
}

fn enroll_team(registry: &mut Registry, input: &mut impl BufRead) {
    let Some(tournament) = prompt(input, "Tournament name") else {
        return;
    };
    let Some(team) = prompt(input, "Team name") else {
        return;
    };
    match registry.enroll_team(&tournament, &team) {
        Ok(true) => println!("Enrolled {} in {}", team.trim(), tournament.trim()),
        Ok(false) => println!("Team was already enrolled."),
        Err(e) => println!("Error: {e}"),
    }
}

fn schedule_match(registry: &mut Registry, input: &mut impl BufRead) {
    let Some(tournament) = prompt(input, "Tournament name") else {
        return;
    };
    let Some(date) = prompt_date(input, "Match date (yyyy-mm-dd)") else {
        return;
    };
    let Some(team1) = prompt(input, "Team 1") else {
        return;
    };
    let Some(team2) = prompt(input, "Team 2") else {
        return;
    };
    let Some(first) = prompt(input, "Referee first name") else {
        return;
    };
    let Some(last) = prompt(input, "Referee last name") else {
        return;
    };
    let referee = match registry.create_referee(&first, &last) {
        Ok(id) => id,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    match registry.schedule_match(&tournament, date, &team1, &team2, referee) {
        Ok(m) => {
            log::info!("scheduled match {} in '{tournament}'", m.id());
            println!(
                "Match scheduled on {} for game {} ({} vs {})",
                m.date(),
                m.game().name(),
                team1.trim(),
                team2.trim()
            );
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn summary(registry: &Registry) {
    match serde_json::to_string_pretty(&registry.summary()) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("Error: {e}"),
    }
}

/// Print a label and read one trimmed-newline line; None on EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn prompt_u32(input: &mut impl BufRead, label: &str) -> Option<u32> {
    loop {
        let line = prompt(input, label)?;
        match line.trim().parse() {
            Ok(n) => return Some(n),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_date(input: &mut impl BufRead, label: &str) -> Option<NaiveDate> {
    loop {
        let line = prompt(input, label)?;
        match NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d") {
            Ok(date) => return Some(date),
            Err(_) => println!("Please use the yyyy-mm-dd format."),
        }
    }
}
