use std::fmt;

use serde_json::Value;

use crate::quotes::{dto::create_quote_dto::CreateQuoteDto, quote_error::QuoteError};

const MIN_PASSENGERS: f64 = 1.0;
const MAX_PASSENGERS: f64 = 6.0;
const MAX_LUGGAGE: f64 = 8.0;
const CHARGED_EXTRA_PASSENGERS: f64 = 4.0;
const CHARGED_BAGS: f64 = 6.0;
const EXTRA_PASSENGER_FEE: f64 = 8.0;
const BAG_FEE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
  Business,
  First,
  Xl,
}

impl Tier {
  pub const ALL: [Tier; 3] = [Tier::Business, Tier::First, Tier::Xl];

  pub fn base_fare(self) -> f64 {
    match self {
      Tier::Business => 85.0,
      Tier::First => 140.0,
      Tier::Xl => 110.0,
    }
  }

  fn parse(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|tier| tier.to_string() == name)
  }
}

impl fmt::Display for Tier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Tier::Business => "Business",
      Tier::First => "First",
      Tier::Xl => "XL",
    };
    f.write_str(name)
  }
}

/// A fare request with passengers and luggage already clamped to what a
/// single vehicle carries.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
  pub tier: Tier,
  pub passengers: f64,
  pub luggage: f64,
}

impl QuoteRequest {
  pub fn new(tier: Tier, passengers: f64, luggage: f64) -> Self {
    Self {
      tier,
      passengers: passengers.clamp(MIN_PASSENGERS, MAX_PASSENGERS),
      luggage: luggage.clamp(0.0, MAX_LUGGAGE),
    }
  }

  pub fn fare(&self) -> f64 {
    let extra_passengers =
      (self.passengers - 1.0).min(CHARGED_EXTRA_PASSENGERS);
    let bags = self.luggage.min(CHARGED_BAGS);
    self.tier.base_fare()
      + extra_passengers * EXTRA_PASSENGER_FEE
      + bags * BAG_FEE
  }
}

// Presence follows loose truthiness: null, false, 0 and "" count as absent.
fn is_present(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(flag) => *flag,
    Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
    Value::String(text) => !text.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

impl TryFrom<CreateQuoteDto> for QuoteRequest {
  type Error = QuoteError;

  fn try_from(dto: CreateQuoteDto) -> Result<Self, Self::Error> {
    if !is_present(&dto.tier) {
      return Err(QuoteError::MissingFields);
    }
    let passengers = dto
      .passengers
      .as_f64()
      .ok_or(QuoteError::MissingFields)?;
    let luggage = dto.luggage.as_f64().unwrap_or(0.0);
    let tier = dto
      .tier
      .as_str()
      .and_then(Tier::parse)
      .ok_or(QuoteError::InvalidTier)?;
    Ok(Self::new(tier, passengers, luggage))
  }
}
