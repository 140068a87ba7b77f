//! Error types for `agenda-core`.
//!
//! Every business failure a service can raise is one variant here. The HTTP
//! boundary owns the mapping from variant to status code; nothing in this
//! crate knows about HTTP.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was absent from the request.
  #[error("{0}")]
  RequiredFieldMissing(String),

  /// A required field was present but blank.
  #[error("{0}")]
  EmptyField(String),

  /// A field was present but did not match its expected format.
  #[error("{0}")]
  InvalidFormat(String),

  #[error("{0}")]
  NotFound(String),

  /// A listing that must not be empty had nothing to return.
  #[error("{0}")]
  NothingToList(String),

  #[error("{0}")]
  BadCredentials(String),

  /// The persistence backend failed.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error into [`Error::Store`].
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
