use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorRto {
  pub detail: Vec<ValidationErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
  #[serde(rename = "type")]
  pub kind: String,
  pub loc: Vec<String>,
  pub msg: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ctx: Option<Value>,
}

impl ValidationErrorDetail {
  /// A detail located at the request body itself.
  pub fn body(kind: &str, msg: impl ToString) -> Self {
    Self {
      kind: String::from(kind),
      loc: vec![String::from("body")],
      msg: msg.to_string(),
      input: None,
      ctx: None,
    }
  }

  pub fn at(mut self, field: &str) -> Self {
    self.loc.push(String::from(field));
    self
  }

  pub fn with_input(mut self, input: Value) -> Self {
    self.input = Some(input);
    self
  }

  pub fn with_ctx(mut self, ctx: Value) -> Self {
    self.ctx = Some(ctx);
    self
  }
}
