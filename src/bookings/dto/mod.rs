pub mod create_booking_dto;
