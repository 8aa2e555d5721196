use config_handler::Config;
use lazy_static::lazy_static;

pub mod config_handler;
pub mod models;
pub mod dataset;
pub mod stats;
pub mod routes;
pub mod search;
pub mod player_service;
pub mod fixture_service;
pub mod match_service;
pub mod standing_service;
pub mod news_service;
pub mod models_api;
pub mod api;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}
