//! Handlers for `/contatos` endpoints.
//!
//! | Method   | Path                     | Notes |
//! |----------|--------------------------|-------|
//! | `POST`   | `/contatos`              | body needs `idPessoa` |
//! | `GET`    | `/contatos/{id}`         | 404 if not found |
//! | `GET`    | `/contatos/pessoa/{id}`  | 400 when the person has none |
//! | `PUT`    | `/contatos/{id}`         | kind + value only |
//! | `DELETE` | `/contatos/{id}`         | 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use agenda_core::{dto::ContactDto, service::ContactService, store::ContactStore};

use crate::{
  error::{ApiError, ErrorBody},
  extract::{ApiJson, ApiPath},
};

/// `POST /contatos`
#[utoipa::path(
  post,
  path = "/contatos",
  operation_id = "create_contact",
  tag = "contatos",
  request_body = ContactDto,
  responses(
    (status = 201, description = "Contact created", body = ContactDto),
    (status = 400, description = "Missing or blank field", body = ErrorBody),
    (status = 404, description = "Person not found", body = ErrorBody),
    (status = 422, description = "Malformed field", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<ContactDto>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let contact = ContactService::new(&*store).create(&body).await?;
  Ok((StatusCode::CREATED, Json(contact)))
}

/// `GET /contatos/{id}`
#[utoipa::path(
  get,
  path = "/contatos/{id}",
  operation_id = "get_contact",
  tag = "contatos",
  params(("id" = i64, Path, description = "Contact id")),
  responses(
    (status = 200, description = "The contact", body = ContactDto),
    (status = 404, description = "Contact not found", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<ContactDto>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(ContactService::new(&*store).get(id).await?))
}

/// `GET /contatos/pessoa/{id}`
#[utoipa::path(
  get,
  path = "/contatos/pessoa/{id}",
  operation_id = "list_contacts_by_person",
  tag = "contatos",
  params(("id" = i64, Path, description = "Person id")),
  responses(
    (status = 200, description = "The person's contacts, ordered by id", body = Vec<ContactDto>),
    (status = 400, description = "The person has no contacts", body = ErrorBody),
    (status = 404, description = "Person not found", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn list_by_person<S>(
  State(store): State<Arc<S>>,
  ApiPath(person_id): ApiPath<i64>,
) -> Result<Json<Vec<ContactDto>>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(ContactService::new(&*store).list_by_person(person_id).await?))
}

/// `PUT /contatos/{id}`
#[utoipa::path(
  put,
  path = "/contatos/{id}",
  operation_id = "update_contact",
  tag = "contatos",
  params(("id" = i64, Path, description = "Contact id")),
  request_body = ContactDto,
  responses(
    (status = 200, description = "Contact updated", body = ContactDto),
    (status = 400, description = "Missing or blank field", body = ErrorBody),
    (status = 404, description = "Contact not found", body = ErrorBody),
    (status = 422, description = "Malformed field", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn update<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
  ApiJson(body): ApiJson<ContactDto>,
) -> Result<Json<ContactDto>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(ContactService::new(&*store).update(id, &body).await?))
}

/// `DELETE /contatos/{id}`
#[utoipa::path(
  delete,
  path = "/contatos/{id}",
  operation_id = "delete_contact",
  tag = "contatos",
  params(("id" = i64, Path, description = "Contact id")),
  responses(
    (status = 204, description = "Contact deleted"),
    (status = 404, description = "Contact not found", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
{
  ContactService::new(&*store).delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
