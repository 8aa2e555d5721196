use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MatchResult;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ApiMatchStats {
    pub shots_home: u32,
    pub shots_away: u32,
    pub possession_home: u32,
    pub possession_away: u32,
    pub tackles_home: u32,
    pub tackles_away: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiMatchResult {
    pub id: String,
    pub date: NaiveDate,
    pub competition: String,
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub xg_home: f64,
    pub xg_away: f64,
    pub stats: ApiMatchStats,
}

impl From<&MatchResult> for ApiMatchResult {
    fn from(r: &MatchResult) -> Self {
        ApiMatchResult {
            id: r.id.clone(),
            date: r.date,
            competition: r.competition.clone(),
            home_team: r.home_team.clone(),
            away_team: r.away_team.clone(),
            score: r.score.clone(),
            xg_home: r.xg_home,
            xg_away: r.xg_away,
            stats: ApiMatchStats {
                shots_home: r.stats.shots_home,
                shots_away: r.stats.shots_away,
                possession_home: r.stats.possession_home,
                possession_away: r.stats.possession_away,
                tackles_home: r.stats.tackles_home,
                tackles_away: r.stats.tackles_away,
            },
        }
    }
}
