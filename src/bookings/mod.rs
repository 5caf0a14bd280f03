pub mod dto;
pub mod model;
pub mod rto;

use actix_web::{HttpResponse, Responder};
use dto::create_booking_dto::CreateBookingDto;
use model::Booking;
use rto::booking_received_rto::BookingReceivedRto;

use crate::shared::extractor::validated_json::ValidatedJson;

const BOOKING_RECEIVED: &str = "Booking received";

/// Acknowledges a booking by echoing it back. Shape errors never reach this
/// handler, they are rejected by `ValidatedJson`.
pub async fn create_booking(
  dto: ValidatedJson<CreateBookingDto>,
) -> impl Responder {
  let booking = Booking::from(dto.into_inner());
  log::info!("Booking received");
  log::debug!(
    "Booking pickup={:?} dropoff={:?}",
    booking.pickup,
    booking.dropoff
  );
  booking_received(booking)
}

fn booking_received(booking: Booking) -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(BookingReceivedRto::from(booking))
}

impl From<CreateBookingDto> for Booking {
  fn from(dto: CreateBookingDto) -> Self {
    Self {
      pickup: dto.pickup,
      dropoff: dto.dropoff,
    }
  }
}

// Transform Booking domain to RTO
impl From<Booking> for BookingReceivedRto {
  fn from(booking: Booking) -> Self {
    Self {
      message: String::from(BOOKING_RECEIVED),
      pickup: booking.pickup,
      dropoff: booking.dropoff,
    }
  }
}
