use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::quotes::{
  model::Tier,
  rto::quote_error_rto::{ExpectedQuoteFields, QuoteErrorRto},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
  #[error("Missing fields")]
  MissingFields,

  #[error("Invalid tier")]
  InvalidTier,
}

impl From<&QuoteError> for QuoteErrorRto {
  fn from(error: &QuoteError) -> Self {
    match error {
      QuoteError::MissingFields => Self {
        error: error.to_string(),
        expected: Some(ExpectedQuoteFields {
          tier: String::from("Business | First | XL"),
          passengers: String::from("number"),
          luggage: String::from("number (optional)"),
        }),
        allowed: None,
      },
      QuoteError::InvalidTier => Self {
        error: error.to_string(),
        expected: None,
        allowed: Some(Tier::ALL.iter().map(|tier| tier.to_string()).collect()),
      },
    }
  }
}

impl ResponseError for QuoteError {
  fn status_code(&self) -> StatusCode {
    StatusCode::BAD_REQUEST
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code())
      .content_type("application/json")
      .json(QuoteErrorRto::from(self))
  }
}
