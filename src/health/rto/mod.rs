pub mod health_rto;
pub mod status_rto;
