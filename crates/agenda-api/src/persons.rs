//! Handlers for `/pessoas` endpoints.
//!
//! | Method   | Path                      | Notes |
//! |----------|---------------------------|-------|
//! | `POST`   | `/pessoas`                | 201 + created person |
//! | `GET`    | `/pessoas`                | `[]` when empty |
//! | `GET`    | `/pessoas/{id}`           | 404 if not found |
//! | `GET`    | `/pessoas/maladireta/{id}`| mailing label |
//! | `PUT`    | `/pessoas/{id}`           | full replacement |
//! | `DELETE` | `/pessoas/{id}`           | 204; cascades to contacts |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use agenda_core::{
  dto::{MailingDto, PersonDto},
  service::PersonService,
  store::ContactStore,
};

use crate::{
  error::{ApiError, ErrorBody},
  extract::{ApiJson, ApiPath},
};

/// `POST /pessoas`
#[utoipa::path(
  post,
  path = "/pessoas",
  operation_id = "create_person",
  tag = "pessoas",
  request_body = PersonDto,
  responses(
    (status = 201, description = "Person created", body = PersonDto),
    (status = 400, description = "Missing or blank field", body = ErrorBody),
    (status = 422, description = "Malformed field", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<PersonDto>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let person = PersonService::new(&*store).create(&body).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

/// `GET /pessoas`
#[utoipa::path(
  get,
  path = "/pessoas",
  operation_id = "list_persons",
  tag = "pessoas",
  responses(
    (status = 200, description = "Every person, ordered by id", body = Vec<PersonDto>),
  ),
  security(("bearer" = []))
)]
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<PersonDto>>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(PersonService::new(&*store).list().await?))
}

/// `GET /pessoas/{id}`
#[utoipa::path(
  get,
  path = "/pessoas/{id}",
  operation_id = "get_person",
  tag = "pessoas",
  params(("id" = i64, Path, description = "Person id")),
  responses(
    (status = 200, description = "The person", body = PersonDto),
    (status = 404, description = "Person not found", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<PersonDto>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(PersonService::new(&*store).get(id).await?))
}

/// `GET /pessoas/maladireta/{id}`
#[utoipa::path(
  get,
  path = "/pessoas/maladireta/{id}",
  operation_id = "get_mailing_label",
  tag = "pessoas",
  params(("id" = i64, Path, description = "Person id")),
  responses(
    (status = 200, description = "Mailing label", body = MailingDto),
    (status = 404, description = "Person not found", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn mailing<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<MailingDto>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(PersonService::new(&*store).mailing_view(id).await?))
}

/// `PUT /pessoas/{id}`
#[utoipa::path(
  put,
  path = "/pessoas/{id}",
  operation_id = "update_person",
  tag = "pessoas",
  params(("id" = i64, Path, description = "Person id")),
  request_body = PersonDto,
  responses(
    (status = 200, description = "Person updated", body = PersonDto),
    (status = 400, description = "Missing or blank field", body = ErrorBody),
    (status = 404, description = "Person not found", body = ErrorBody),
    (status = 422, description = "Malformed field", body = ErrorBody),
  ),
  security(("bearer" = []))
)]
pub async fn update<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
  ApiJson(body): ApiJson<PersonDto>,
) -> Result<Json<PersonDto>, ApiError>
where
  S: ContactStore,
{
  Ok(Json(PersonService::new(&*store).update(id, &body).await?))
}

/// `DELETE /pessoas/{id}`
#[utoipa::path(
  delete,
  path = "/pessoas/{id}",
  operation_id = "delete_person",
  tag = "pessoas",
  params(("id" = i64, Path, description = "Person id")),
  responses(
    (status = 204, description = "Person and its contacts deleted"),
    (status = 404, description = "Person not found", body = ErrorBody),
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
  PersonService::new(&*store).delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
