use chrono::NaiveDate;
use lazy_static::lazy_static;

use crate::models::{Fixture, MatchResult, MatchStats, NewsItem, Player, Position, TableRow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

// Demo data only, replace with an API later.
lazy_static! {
    pub static ref DEMO_PLAYERS: Vec<Player> = vec![
        Player { id: 1, name: "Declan Rice".to_string(), position: Position::DM, nationality: "ENG".to_string(), minutes: 3200, tackles: 98, tackles_won: 72, passes: 2600, passes_completed: 2365, shots: 44, goals: 8, assists: 6 },
        Player { id: 2, name: "Martin Ødegaard".to_string(), position: Position::AM, nationality: "NOR".to_string(), minutes: 3005, tackles: 42, tackles_won: 23, passes: 2820, passes_completed: 2530, shots: 96, goals: 14, assists: 10 },
        Player { id: 3, name: "Ben White".to_string(), position: Position::RB, nationality: "ENG".to_string(), minutes: 3150, tackles: 90, tackles_won: 60, passes: 2100, passes_completed: 1950, shots: 32, goals: 4, assists: 7 },
        Player { id: 4, name: "William Saliba".to_string(), position: Position::CB, nationality: "FRA".to_string(), minutes: 3330, tackles: 70, tackles_won: 55, passes: 2800, passes_completed: 2670, shots: 12, goals: 2, assists: 1 },
        Player { id: 5, name: "Bukayo Saka".to_string(), position: Position::RW, nationality: "ENG".to_string(), minutes: 2990, tackles: 35, tackles_won: 18, passes: 1650, passes_completed: 1410, shots: 110, goals: 16, assists: 12 },
    ];

    pub static ref DEMO_FIXTURES: Vec<Fixture> = vec![
        Fixture {
            id: Fixture::derive_id("ARS", "MCI", date(2025, 8, 17)),
            date: date(2025, 8, 17),
            competition: "Premier League".to_string(),
            home_team: "Arsenal".to_string(),
            away_team: "Man City".to_string(),
            venue: "Emirates".to_string(),
        },
        Fixture {
            id: Fixture::derive_id("CHE", "ARS", date(2025, 8, 24)),
            date: date(2025, 8, 24),
            competition: "Premier League".to_string(),
            home_team: "Chelsea".to_string(),
            away_team: "Arsenal".to_string(),
            venue: "Stamford Bridge".to_string(),
        },
    ];

    pub static ref DEMO_RESULTS: Vec<MatchResult> = vec![
        MatchResult {
            id: "ARS-TOT-2025-05-12".to_string(),
            date: date(2025, 5, 12),
            competition: "Premier League".to_string(),
            home_team: "Arsenal".to_string(),
            away_team: "Spurs".to_string(),
            score: "2–1".to_string(),
            xg_home: 1.9,
            xg_away: 1.1,
            stats: MatchStats { shots_home: 15, shots_away: 9, possession_home: 55, possession_away: 45, tackles_home: 19, tackles_away: 17 },
        },
    ];

    pub static ref DEMO_TABLE: Vec<TableRow> = vec![
        TableRow { team: "Arsenal".to_string(), played: 0, won: 0, drawn: 0, lost: 0, goals_for: 0, goals_against: 0, goal_diff: 0, points: 0 },
        TableRow { team: "Man City".to_string(), played: 0, won: 0, drawn: 0, lost: 0, goals_for: 0, goals_against: 0, goal_diff: 0, points: 0 },
        TableRow { team: "Liverpool".to_string(), played: 0, won: 0, drawn: 0, lost: 0, goals_for: 0, goals_against: 0, goal_diff: 0, points: 0 },
    ];

    pub static ref DEMO_NEWS: Vec<NewsItem> = vec![
        NewsItem { id: 1, date: date(2025, 8, 10), title: "Season opener sold out".to_string(), summary: "The Emirates will be full for the visit of Man City on August 17.".to_string() },
        NewsItem { id: 2, date: date(2025, 8, 5), title: "Rice named vice-captain".to_string(), summary: "Declan Rice takes the armband whenever the skipper is off the pitch.".to_string() },
        NewsItem { id: 3, date: date(2025, 7, 28), title: "Pre-season wrapped up".to_string(), summary: "Three wins and a draw on tour, with Saka topping the shot charts.".to_string() },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_invariants() {
        for p in DEMO_PLAYERS.iter() {
            assert!(p.tackles_won <= p.tackles, "{}: tackles_won > tackles", p.name);
            assert!(p.passes_completed <= p.passes, "{}: passes_completed > passes", p.name);
        }
    }

    #[test]
    fn test_fixture_ids_unique() {
        let mut ids: Vec<&str> = DEMO_FIXTURES.iter().map(|f| f.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), DEMO_FIXTURES.len());
    }

    #[test]
    fn test_result_possession_sums_to_100() {
        for r in DEMO_RESULTS.iter() {
            assert_eq!(r.stats.possession_home + r.stats.possession_away, 100);
        }
    }

    #[test]
    fn test_table_rows_consistent() {
        for row in DEMO_TABLE.iter() {
            assert!(row.is_consistent(), "{} row inconsistent", row.team);
        }
    }
}
