use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteErrorRto {
  pub error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected: Option<ExpectedQuoteFields>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allowed: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedQuoteFields {
  pub tier: String,
  pub passengers: String,
  pub luggage: String,
}
