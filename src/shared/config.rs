use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  pub host: String,
  pub port: u16,
}

impl Config {
  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl Default for Config {
  fn default() -> Self {
    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
      .ok()
      .and_then(|port| port.parse::<u16>().ok())
      .unwrap_or(DEFAULT_PORT);
    Self { host, port }
  }
}
