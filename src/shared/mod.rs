pub mod config;
pub mod extractor;
pub mod http_error;
pub mod request_error;
pub mod rto;
