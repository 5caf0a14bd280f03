use actix_web::{
  error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse,
  ResponseError,
};
use serde_json::{error::Category, json, Value};
use serde_path_to_error::Segment;
use thiserror::Error;

use crate::shared::rto::validation_error_rto::{
  ValidationErrorDetail, ValidationErrorRto,
};

const MISSING_FIELD_PREFIX: &str = "missing field `";
pub const OBJECT_EXPECTED: &str =
  "Input should be a valid dictionary or object to extract fields from";

#[derive(Debug, Error)]
pub enum RequestError {
  #[error("Malformed request: {}", .0.msg)]
  MalformedRequest(ValidationErrorDetail),
}

impl RequestError {
  pub fn detail(&self) -> &ValidationErrorDetail {
    match self {
      Self::MalformedRequest(detail) => detail,
    }
  }

  /// Maps a typed deserialization failure of `body` onto a field-located
  /// detail: `missing`, `string_type` or `model_attributes_type`.
  pub fn from_path_error(
    error: &serde_path_to_error::Error<serde_json::Error>,
    body: &Value,
  ) -> Self {
    let fields: Vec<String> = error
      .path()
      .iter()
      .map(|segment| match segment {
        Segment::Map { key } => key.clone(),
        Segment::Seq { index } => index.to_string(),
        _ => String::from("?"),
      })
      .collect();
    let located = |detail: ValidationErrorDetail| {
      fields.iter().fold(detail, |detail, field| detail.at(field))
    };
    let input = value_at(body, &fields);
    let message = error.inner().to_string();

    let detail = if let Some(field) = missing_field(&message) {
      located(ValidationErrorDetail::body("missing", "Field required"))
        .at(field)
        .with_input(input)
    } else if message.starts_with("invalid type") && fields.is_empty() {
      ValidationErrorDetail::body("model_attributes_type", OBJECT_EXPECTED)
        .with_input(input)
    } else if message.starts_with("invalid type")
      && message.ends_with("expected a string")
    {
      located(ValidationErrorDetail::body(
        "string_type",
        "Input should be a valid string",
      ))
      .with_input(input)
    } else {
      located(ValidationErrorDetail::body("value_error", &message))
        .with_input(input)
    };
    Self::MalformedRequest(detail)
  }
}

fn missing_field(message: &str) -> Option<&str> {
  message.strip_prefix(MISSING_FIELD_PREFIX)?.split('`').next()
}

fn value_at(body: &Value, fields: &[String]) -> Value {
  let pointer: String = fields
    .iter()
    .map(|field| format!("/{}", field.replace('~', "~0").replace('/', "~1")))
    .collect();
  body.pointer(&pointer).cloned().unwrap_or(Value::Null)
}

impl From<JsonPayloadError> for RequestError {
  fn from(error: JsonPayloadError) -> Self {
    let detail = match error {
      JsonPayloadError::Deserialize(err) => match err.classify() {
        Category::Syntax | Category::Eof => {
          ValidationErrorDetail::body("json_invalid", "JSON decode error")
            .with_ctx(json!({ "error": err.to_string() }))
        }
        Category::Data => {
          ValidationErrorDetail::body("model_attributes_type", OBJECT_EXPECTED)
        }
        Category::Io => ValidationErrorDetail::body("payload_invalid", err),
      },
      JsonPayloadError::ContentType => {
        ValidationErrorDetail::body("model_attributes_type", OBJECT_EXPECTED)
      }
      err @ (JsonPayloadError::Overflow { .. }
      | JsonPayloadError::OverflowKnownLength { .. }) => {
        ValidationErrorDetail::body("payload_too_large", err)
      }
      err => ValidationErrorDetail::body("payload_invalid", err),
    };
    Self::MalformedRequest(detail)
  }
}

impl From<&RequestError> for ValidationErrorRto {
  fn from(error: &RequestError) -> Self {
    Self {
      detail: vec![error.detail().clone()],
    }
  }
}

impl ResponseError for RequestError {
  fn status_code(&self) -> StatusCode {
    match self {
      Self::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code())
      .content_type("application/json")
      .json(ValidationErrorRto::from(self))
  }
}

/// JSON extractor configuration that turns every body parsing failure into
/// a 422 `MalformedRequest`. A missing content type is read as JSON.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(json_error_handler)
}

fn json_error_handler(
  error: JsonPayloadError,
  request: &HttpRequest,
) -> actix_web::Error {
  let error = RequestError::from(error);
  log::debug!("Rejected {} {}: {}", request.method(), request.path(), error);
  error.into()
}
