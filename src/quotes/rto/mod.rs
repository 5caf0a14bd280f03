pub mod quote_error_rto;
pub mod quote_rto;
