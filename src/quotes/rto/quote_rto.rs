use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRto {
  pub quote: Number,
}

impl From<f64> for QuoteRto {
  // Whole fares are sent as integers.
  fn from(fare: f64) -> Self {
    let quote = if fare.fract() == 0.0 {
      Number::from(fare as i64)
    } else {
      Number::from_f64(fare).unwrap_or_else(|| Number::from(0))
    };
    Self { quote }
  }
}
