//! JSON REST API for the agenda.
//!
//! Exposes an axum [`Router`] backed by any
//! [`agenda_core::store::ContactStore`], and its OpenAPI description as
//! [`ApiDoc`]. Auth and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", agenda_api::api_router(store.clone()))
//! ```

pub mod contacts;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod persons;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use agenda_core::store::ContactStore;

pub use error::{ApiError, ErrorBody};
pub use openapi::ApiDoc;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Persons
    .route("/pessoas", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/pessoas/{id}",
      get(persons::get_one::<S>)
        .put(persons::update::<S>)
        .delete(persons::delete_one::<S>),
    )
    .route("/pessoas/maladireta/{id}", get(persons::mailing::<S>))
    // Contacts
    .route("/contatos", post(contacts::create::<S>))
    .route(
      "/contatos/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .route("/contatos/pessoa/{id}", get(contacts::list_by_person::<S>))
    .with_state(store)
}
