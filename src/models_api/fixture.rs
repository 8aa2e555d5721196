use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Fixture;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiFixture {
    pub id: String,
    pub date: NaiveDate,
    pub competition: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
}

impl From<&Fixture> for ApiFixture {
    fn from(f: &Fixture) -> Self {
        ApiFixture {
            id: f.id.clone(),
            date: f.date,
            competition: f.competition.clone(),
            home_team: f.home_team.clone(),
            away_team: f.away_team.clone(),
            venue: f.venue.clone(),
        }
    }
}
