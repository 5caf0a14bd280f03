use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
  pub detail: String
}

impl From<&str> for HttpError {
  fn from(detail: &str) -> Self {
    Self { detail: String::from(detail) }
  }
}

/// Fallback for requests that match no route.
pub async fn not_found() -> HttpResponse {
  HttpResponse::NotFound()
    .content_type("application/json")
    .json(HttpError::from("Not Found"))
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> HttpResponse {
  HttpResponse::MethodNotAllowed()
    .content_type("application/json")
    .json(HttpError::from("Method Not Allowed"))
}
