pub mod fixture;
pub mod match_result;
pub mod news;
pub mod player;
pub mod standings;
pub mod views;
