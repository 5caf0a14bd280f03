pub mod booking_received_rto;
