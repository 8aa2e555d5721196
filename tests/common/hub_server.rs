use std::process::{Child, Command};
use std::time::Duration;

use assert_cmd::prelude::CommandCargoExt;
use predicates::Predicate;

use arsenal_hub_rs::config_handler::Config;

pub struct HubServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for HubServer {
    fn drop(&mut self) {
        if self.child_process.is_some() {
            self.child_process.as_mut().unwrap().kill()
                .expect("Should kill");
        }
    }
}

impl HubServer {
    pub fn new(port: u16) -> HubServer {
        HubServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str) {
        let config = Config {
            port: self.port,
            club_name: "Arsenal Hub".to_string(),
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("arsenal-hub-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::get(self.url(path)).await
    }

    pub async fn wait_until_ready(&self, retry_ms: u64) {
        let ready = predicates::function::function(|status: &u16| *status == 200);
        for _ in 0..100 {
            if let Ok(rsp) = self.get("/").await {
                if ready.eval(&rsp.status().as_u16()) {
                    return;
                }
            }
            tokio::time::sleep(Duration::from_millis(retry_ms)).await;
        }
        panic!("server on port {} never became ready", self.port);
    }
}
