use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_club_name")]
    pub club_name: String,
}

impl Default for Config {
    fn default() -> Config {
        Config { port: default_port(), club_name: default_club_name() }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_club_name() -> String {
    "Arsenal Hub".to_string()
}

fn load(path: &str) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {path}"))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Could not parse JSON at {path}"))
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    match load(&path) {
        Ok(config) => {
            println!("[CONFIG] {:?}", config);
            config
        }
        Err(e) => {
            println!("[CONFIG] {e:#}, using defaults");
            Config::default()
        }
    }
}
