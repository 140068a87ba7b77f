//! Error types for the server layer and their `IntoResponse` mapping.
//!
//! Responses are rendered through [`ApiError`] so every failure, auth
//! included, has the same `{statusCode, messages}` body.

use agenda_api::ApiError;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Token de acesso ausente ou inválido.")]
  Unauthorized,

  #[error("cannot read key file: {0}")]
  Io(#[from] std::io::Error),

  /// PEM key material could not be parsed.
  #[error("invalid key: {0}")]
  Key(#[source] jsonwebtoken::errors::Error),

  #[error("token error: {0}")]
  Token(#[source] jsonwebtoken::errors::Error),

  #[error(transparent)]
  Api(#[from] ApiError),
}

impl From<agenda_core::Error> for Error {
  fn from(e: agenda_core::Error) -> Self { Error::Api(ApiError::Domain(e)) }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        ApiError::Unauthorized(self.to_string()).into_response()
      }
      Error::Io(_) | Error::Key(_) | Error::Token(_) => {
        ApiError::Internal(self.to_string()).into_response()
      }
      Error::Api(e) => e.into_response(),
    }
  }
}
