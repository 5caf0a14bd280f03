use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::{
  request_error::{RequestError, OBJECT_EXPECTED},
  rto::validation_error_rto::ValidationErrorDetail,
};

/// JSON body extractor whose rejections name the offending field.
///
/// The body is first read as a `serde_json::Value` through `web::Json`, so
/// `JsonConfig` still governs content type, size limit and syntax errors.
/// The value is then deserialized into `T` with path tracking.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T: DeserializeOwned + 'static> FromRequest for ValidatedJson<T> {
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
    let body = web::Json::<Value>::from_request(req, payload);
    let method = req.method().clone();
    let path = req.path().to_string();
    async move {
      let web::Json(body) = body.await?;
      parse_body(&body).map(ValidatedJson).map_err(|error| {
        log::debug!("Rejected {} {}: {}", method, path, error);
        Error::from(error)
      })
    }
    .boxed_local()
  }
}

pub fn parse_body<T: DeserializeOwned>(body: &Value) -> Result<T, RequestError> {
  if !body.is_object() {
    return Err(RequestError::MalformedRequest(
      ValidationErrorDetail::body("model_attributes_type", OBJECT_EXPECTED)
        .with_input(body.clone()),
    ));
  }
  serde_path_to_error::deserialize(body)
    .map_err(|error| RequestError::from_path_error(&error, body))
}
