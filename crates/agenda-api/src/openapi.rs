//! OpenAPI description of the routes in [`crate::api_router`].
//!
//! Paths are relative to wherever the router is nested. Every operation
//! requires the `bearer` security scheme, which the embedding server
//! registers.

use utoipa::OpenApi;

use agenda_core::dto::{ContactDto, MailingDto, PersonDto};

use crate::{ErrorBody, contacts, persons};

#[derive(OpenApi)]
#[openapi(
  paths(
    persons::create,
    persons::list,
    persons::get_one,
    persons::mailing,
    persons::update,
    persons::delete_one,
    contacts::create,
    contacts::get_one,
    contacts::list_by_person,
    contacts::update,
    contacts::delete_one,
  ),
  components(schemas(PersonDto, MailingDto, ContactDto, ErrorBody)),
  tags(
    (name = "pessoas", description = "Registered persons"),
    (name = "contatos", description = "Contacts owned by a person"),
  )
)]
pub struct ApiDoc;
