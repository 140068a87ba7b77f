//! HTTP server for the agenda.
//!
//! Mounts the JSON API from `agenda-api` under `/api` behind bearer-token
//! auth, adds `POST /login` for issuing tokens, and serves the OpenAPI
//! document at `/api-docs/openapi.json` with Swagger UI at `/swagger-ui`.

pub mod auth;
pub mod error;
pub mod openapi;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use agenda_core::{service::CredentialService, store::ContactStore};
use axum::{Router, middleware, routing::post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi as _;
use utoipa_swagger_ui::SwaggerUi;

use auth::TokenKeys;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `AGENDA_*` environment variables.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                 String,
  #[serde(default = "default_port")]
  pub port:                 u16,
  pub store_path:           PathBuf,
  /// PKCS#8 Ed25519 private key used to sign tokens.
  pub jwt_private_key_path: PathBuf,
  pub jwt_public_key_path:  PathBuf,
  #[serde(default = "default_token_ttl")]
  pub token_ttl_seconds:    i64,
  #[serde(default = "default_admin_name")]
  pub admin_name:           String,
  #[serde(default = "default_admin_email")]
  pub admin_email:          String,
  /// Argon2 PHC string. Without it no administrator is seeded.
  #[serde(default)]
  pub admin_password_hash:  Option<String>,
}

fn default_host() -> String { "127.0.0.1".to_owned() }
fn default_port() -> u16 { 8080 }
fn default_token_ttl() -> i64 { 1440 }
fn default_admin_name() -> String { "Administrador".to_owned() }
fn default_admin_email() -> String { "admin@agenda.local".to_owned() }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the server's own handlers.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
  pub keys:   Arc<TokenKeys>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: `/login`, the authenticated `/api`
/// tree and the public API docs, with request tracing on everything.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  let api = agenda_api::api_router(state.store.clone()).layer(
    middleware::from_fn_with_state(state.clone(), auth::require_bearer),
  );

  Router::new()
    .route("/login", post(auth::login::<S>))
    .with_state(state)
    .nest("/api", api)
    .merge(
      SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", openapi::ServerDoc::openapi()),
    )
    .layer(TraceLayer::new_for_http())
}

/// Create the configured administrator if it does not exist yet.
pub async fn seed_admin<S>(
  store: &S,
  config: &ServerConfig,
) -> agenda_core::Result<bool>
where
  S: ContactStore,
{
  let Some(hash) = config.admin_password_hash.as_deref() else {
    warn!("admin_password_hash not set; skipping admin seeding");
    return Ok(false);
  };
  CredentialService::new(store)
    .ensure_admin(&config.admin_name, &config.admin_email, hash)
    .await
}

// ─── Integration tests ────────────────────────────────────────────────────────
