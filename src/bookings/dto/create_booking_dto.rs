use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingDto {
  pub pickup: String,
  pub dropoff: String,
}
