use serde::Deserialize;
use serde_json::Value;

/// Loosely typed on purpose: presence and type are judged by
/// `QuoteRequest::try_from`, which answers 400 instead of 422.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuoteDto {
  #[serde(default)]
  pub tier: Value,
  #[serde(default)]
  pub passengers: Value,
  #[serde(default)]
  pub luggage: Value,
}
