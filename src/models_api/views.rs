use serde::{Deserialize, Serialize};

use super::fixture::ApiFixture;
use super::match_result::ApiMatchResult;
use super::news::ApiNewsItem;
use super::player::ApiPlayer;
use super::standings::ApiTableRow;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HomeView {
    pub nav: Vec<NavEntry>,
    pub upcoming: Vec<ApiFixture>,
    pub latest_results: Vec<ApiMatchResult>,
    pub tackle_leaders: Vec<ApiPlayer>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixturesView {
    pub nav: Vec<NavEntry>,
    pub fixtures: Vec<ApiFixture>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixtureView {
    pub nav: Vec<NavEntry>,
    pub fixture: ApiFixture,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TableView {
    pub nav: Vec<NavEntry>,
    pub rows: Vec<ApiTableRow>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayersView {
    pub nav: Vec<NavEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub players: Vec<ApiPlayer>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerView {
    pub nav: Vec<NavEntry>,
    pub player: ApiPlayer,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchView {
    pub nav: Vec<NavEntry>,
    pub result: ApiMatchResult,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewsView {
    pub nav: Vec<NavEntry>,
    pub items: Vec<ApiNewsItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NotFoundView {
    pub nav: Vec<NavEntry>,
    pub path: String,
}
