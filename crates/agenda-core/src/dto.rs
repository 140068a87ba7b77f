//! Wire-facing projections of [`Person`] and [`Contact`].
//!
//! Field names follow the JSON contract clients already speak (`nome`,
//! `cep`, `tipoContato`, `idPessoa`, …). Request DTOs keep every field
//! optional so that presence can be checked explicitly by
//! [`crate::validation`] instead of failing inside the JSON parser.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{contact::Contact, person::Person};

// ─── Person ──────────────────────────────────────────────────────────────────

/// Request and response body for `/api/pessoas`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
pub struct PersonDto {
  /// Ignored on input; always set on output.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:           Option<i64>,
  /// Letters and spaces only.
  #[serde(rename = "nome")]
  #[schema(example = "Taina")]
  pub name:         Option<String>,
  #[serde(rename = "endereco")]
  pub address:      Option<String>,
  #[serde(rename = "numeroCasa")]
  pub house_number: Option<String>,
  #[serde(rename = "cep")]
  #[schema(example = "06700-000")]
  pub postal_code:  Option<String>,
  #[serde(rename = "cidade")]
  pub city:         Option<String>,
  /// Two-letter state code.
  #[schema(example = "SP")]
  pub uf:           Option<String>,
}

impl From<&Person> for PersonDto {
  fn from(p: &Person) -> Self {
    Self {
      id:           Some(p.person_id),
      name:         Some(p.name.clone()),
      address:      p.address.clone(),
      house_number: p.house_number.clone(),
      postal_code:  p.postal_code.clone(),
      city:         p.city.clone(),
      uf:           p.uf.map(|uf| uf.to_string()),
    }
  }
}

// ─── Mailing label ───────────────────────────────────────────────────────────

/// Read-only "mala direta" view: the address fields joined into one
/// printable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MailingDto {
  #[serde(rename = "idPessoa")]
  pub person_id: i64,
  #[serde(rename = "nome")]
  pub name:      String,
  #[serde(rename = "malaDireta")]
  pub label:     String,
}

impl From<&Person> for MailingDto {
  fn from(p: &Person) -> Self {
    let label = format!(
      "{} – CEP: {} – {} / {}",
      p.address.as_deref().unwrap_or_default(),
      p.postal_code.as_deref().unwrap_or_default(),
      p.city.as_deref().unwrap_or_default(),
      p.uf.map(|uf| uf.to_string()).unwrap_or_default(),
    );
    Self { person_id: p.person_id, name: p.name.clone(), label }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// Request and response body for `/api/contatos`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
pub struct ContactDto {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:        Option<i64>,
  /// One of `TELEFONE_FIXO`, `CELULAR`, `EMAIL`, `LINKEDIN`.
  #[serde(rename = "tipoContato")]
  #[schema(example = "CELULAR")]
  pub kind:      Option<String>,
  #[serde(rename = "contato")]
  #[schema(example = "11974510719")]
  pub value:     Option<String>,
  /// Owner id. Required on create; ignored on update.
  #[serde(rename = "idPessoa")]
  pub person_id: Option<i64>,
}

impl From<&Contact> for ContactDto {
  fn from(c: &Contact) -> Self {
    Self {
      id:        Some(c.contact_id),
      kind:      Some(c.kind.to_string()),
      value:     Some(c.value.clone()),
      person_id: Some(c.person_id),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::{contact::ContactKind, uf::Uf};

  fn taina() -> Person {
    Person {
      person_id:    7,
      name:         "Taina".into(),
      address:      Some("Rua Penha, 102".into()),
      house_number: Some("102".into()),
      postal_code:  Some("06700-000".into()),
      city:         Some("Cotia".into()),
      uf:           Some(Uf::SP),
    }
  }

  #[test]
  fn person_dto_uses_portuguese_field_names() {
    let value = serde_json::to_value(PersonDto::from(&taina())).unwrap();
    assert_eq!(
      value,
      json!({
        "id": 7,
        "nome": "Taina",
        "endereco": "Rua Penha, 102",
        "numeroCasa": "102",
        "cep": "06700-000",
        "cidade": "Cotia",
        "uf": "SP",
      })
    );
  }

  #[test]
  fn person_dto_accepts_missing_fields() {
    let dto: PersonDto =
      serde_json::from_value(json!({ "nome": "Taina" })).unwrap();
    assert_eq!(dto.name.as_deref(), Some("Taina"));
    assert!(dto.id.is_none());
    assert!(dto.postal_code.is_none());
    assert!(dto.uf.is_none());
  }

  #[test]
  fn mailing_label_joins_address_fields() {
    let label = MailingDto::from(&taina());
    assert_eq!(label.person_id, 7);
    assert_eq!(label.name, "Taina");
    assert_eq!(label.label, "Rua Penha, 102 – CEP: 06700-000 – Cotia / SP");
  }

  #[test]
  fn mailing_label_renders_missing_parts_empty() {
    let person = Person {
      address: None,
      uf: None,
      ..taina()
    };
    let label = MailingDto::from(&person);
    assert_eq!(label.label, " – CEP: 06700-000 – Cotia / ");
  }

  #[test]
  fn contact_dto_round_trips_wire_names() {
    let contact = Contact {
      contact_id: 3,
      person_id:  1,
      kind:       ContactKind::Celular,
      value:      "11974510719".into(),
    };
    let value = serde_json::to_value(ContactDto::from(&contact)).unwrap();
    assert_eq!(
      value,
      json!({
        "id": 3,
        "tipoContato": "CELULAR",
        "contato": "11974510719",
        "idPessoa": 1,
      })
    );
  }
}
