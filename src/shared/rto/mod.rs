pub mod validation_error_rto;
