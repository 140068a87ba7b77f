//! The server's OpenAPI document: `/login` plus the API routes nested
//! under `/api`, with the bearer scheme they require.

use utoipa::{
  Modify, OpenApi,
  openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::auth::{self, LoginRequest, LoginResponse};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Controle de contatos",
    description = "Cadastro de pessoas e dos seus contatos."
  ),
  paths(auth::login),
  components(schemas(LoginRequest, LoginResponse)),
  nest((path = "/api", api = agenda_api::ApiDoc)),
  modifiers(&BearerScheme)
)]
pub struct ServerDoc;

/// Registers the `bearer` scheme referenced by every `/api` operation.
struct BearerScheme;

impl Modify for BearerScheme {
  fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
    let components = openapi.components.get_or_insert_with(Default::default);
    components.add_security_scheme(
      "bearer",
      SecurityScheme::Http(
        HttpBuilder::new()
          .scheme(HttpAuthScheme::Bearer)
          .bearer_format("JWT")
          .build(),
      ),
    );
  }
}
