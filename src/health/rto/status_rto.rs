use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRto {
  pub status: String,
}

impl From<&str> for StatusRto {
  fn from(status: &str) -> Self {
    Self {
      status: String::from(status),
    }
  }
}
