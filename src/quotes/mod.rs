pub mod dto;
pub mod model;
pub mod quote_error;
pub mod rto;

use actix_web::HttpResponse;
use dto::create_quote_dto::CreateQuoteDto;
use model::QuoteRequest;
use quote_error::QuoteError;
use rto::quote_rto::QuoteRto;

use crate::shared::extractor::validated_json::ValidatedJson;

/// Prices a ride from its tier, passenger count and luggage. Stateless.
pub async fn create_quote(
  dto: ValidatedJson<CreateQuoteDto>,
) -> Result<HttpResponse, QuoteError> {
  let request = QuoteRequest::try_from(dto.into_inner())
    .inspect_err(|error| log::debug!("Quote rejected: {}", error))?;
  let fare = request.fare();
  log::debug!("Quoted {} for {:?}", fare, request);
  Ok(quote_created(fare))
}

fn quote_created(fare: f64) -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(QuoteRto::from(fare))
}
