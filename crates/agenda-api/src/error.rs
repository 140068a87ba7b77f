//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! This is the one place where failures become HTTP statuses. Every error
//! response has the same body:
//!
//! ```json
//! { "statusCode": 422, "messages": ["CEP inválido! ..."] }
//! ```

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Domain(#[from] agenda_core::Error),

  /// The request body or path could not be parsed.
  #[error("{0}")]
  Rejected(String),

  /// Missing or invalid bearer token.
  #[error("{0}")]
  Unauthorized(String),

  /// A failure outside the domain (e.g. token signing).
  #[error("internal error: {0}")]
  Internal(String),
}

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
  #[schema(example = 404)]
  pub status_code: u16,
  pub messages:    Vec<String>,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    use agenda_core::Error as E;
    match self {
      ApiError::Domain(E::RequiredFieldMissing(_) | E::EmptyField(_)) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::Domain(E::InvalidFormat(_)) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Domain(E::NotFound(_)) => StatusCode::NOT_FOUND,
      ApiError::Domain(E::NothingToList(_)) => StatusCode::BAD_REQUEST,
      ApiError::Domain(E::BadCredentials(_)) => StatusCode::UNAUTHORIZED,
      ApiError::Domain(E::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Rejected(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::Rejected(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      error!(error = %self, "request failed");
    } else {
      debug!(status = status.as_u16(), error = %self, "request rejected");
    }

    let body = ErrorBody {
      status_code: status.as_u16(),
      messages:    vec![self.to_string()],
    };
    let mut res = (status, Json(body)).into_response();
    if matches!(self, ApiError::Unauthorized(_)) {
      res
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    }
    res
  }
}
