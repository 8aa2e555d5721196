use serde::{Deserialize, Serialize};

use crate::models::Player;
use crate::stats::pct;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiPlayer {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub nationality: String,
    pub minutes: u32,
    pub tackles: u32,
    pub tackles_won: u32,
    pub passes: u32,
    pub passes_completed: u32,
    pub shots: u32,
    pub goals: u32,
    pub assists: u32,

    pub tackle_success_pct: f64,
    pub pass_completion_pct: f64,
}

impl From<&Player> for ApiPlayer {
    fn from(p: &Player) -> Self {
        ApiPlayer {
            id: p.id,
            name: p.name.clone(),
            position: p.position.to_string(),
            nationality: p.nationality.clone(),
            minutes: p.minutes,
            tackles: p.tackles,
            tackles_won: p.tackles_won,
            passes: p.passes,
            passes_completed: p.passes_completed,
            shots: p.shots,
            goals: p.goals,
            assists: p.assists,
            tackle_success_pct: pct(p.tackles_won, p.tackles),
            pass_completion_pct: pct(p.passes_completed, p.passes),
        }
    }
}
