pub mod rto;

use actix_web::{HttpResponse, Responder};
use rto::{health_rto::HealthRto, status_rto::StatusRto};

/// Liveness probe. Ignores headers and query parameters.
pub async fn health_check() -> impl Responder {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(StatusRto::from("Backend running"))
}

/// Machine-oriented health probe used by deployment checks.
pub async fn health() -> impl Responder {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(HealthRto { ok: true })
}
