/// A pickup/dropoff pair submitted by a rider. Lives only for the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
  pub pickup: String,
  pub dropoff: String,
}
