use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

pub type TeamName = String;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    GK,
    RB,
    CB,
    LB,
    DM,
    CM,
    AM,
    RW,
    LW,
    ST,
}

impl FromStr for Position {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GK" => Ok(Position::GK),
            "RB" => Ok(Position::RB),
            "CB" => Ok(Position::CB),
            "LB" => Ok(Position::LB),
            "DM" => Ok(Position::DM),
            "CM" => Ok(Position::CM),
            "AM" => Ok(Position::AM),
            "RW" => Ok(Position::RW),
            "LW" => Ok(Position::LW),
            "ST" => Ok(Position::ST),
            _ => Err(ParseStringError),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub nationality: String,
    pub minutes: u32,
    pub tackles: u32,
    pub tackles_won: u32,
    pub passes: u32,
    pub passes_completed: u32,
    pub shots: u32,
    pub goals: u32,
    pub assists: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Fixture {
    pub id: String,
    pub date: NaiveDate,
    pub competition: String,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub venue: String,
}

impl Fixture {
    /// Fixture ids are derived from the team codes and the date,
    /// e.g. `ARS-MCI-2025-08-17`.
    pub fn derive_id(home_code: &str, away_code: &str, date: NaiveDate) -> String {
        format!("{home_code}-{away_code}-{date}")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchStats {
    pub shots_home: u32,
    pub shots_away: u32,
    pub possession_home: u32,
    pub possession_away: u32,
    pub tackles_home: u32,
    pub tackles_away: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchResult {
    pub id: String,
    pub date: NaiveDate,
    pub competition: String,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub score: String,
    pub xg_home: f64,
    pub xg_away: f64,
    pub stats: MatchStats,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TableRow {
    pub team: TeamName,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: i16,
    pub goals_against: i16,
    pub goal_diff: i16,
    pub points: u16,
}

impl TableRow {
    /// Holds for any populated row: gd = gf - ga, pts = 3w + d.
    pub fn is_consistent(&self) -> bool {
        self.goal_diff == self.goals_for - self.goals_against
            && self.points == 3 * self.won + self.drawn
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewsItem {
    pub id: i32,
    pub date: NaiveDate,
    pub title: String,
    pub summary: String,
}
