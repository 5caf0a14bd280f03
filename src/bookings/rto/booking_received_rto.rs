use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceivedRto {
  pub message: String,
  pub pickup: String,
  pub dropoff: String,
}
