use serde::{Deserialize, Serialize};

use crate::models::TableRow;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiTableRow {
    pub rank: u8,
    pub team: String,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: i16,
    pub goals_against: i16,
    pub goal_diff: i16,
    pub points: u16,
}

impl From<&TableRow> for ApiTableRow {
    fn from(r: &TableRow) -> Self {
        ApiTableRow {
            rank: 0,
            team: r.team.clone(),
            played: r.played,
            won: r.won,
            drawn: r.drawn,
            lost: r.lost,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            goal_diff: r.goal_diff,
            points: r.points,
        }
    }
}
