//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Enumerations are stored by their wire spelling (`SP`, `CELULAR`). Role
//! lists are stored as compact JSON.

use std::str::FromStr;

use agenda_core::{
  contact::{Contact, ContactKind},
  credential::{Credential, Role},
  person::Person,
  uf::Uf,
};

use crate::{Error, Result};

// ─── Uf ──────────────────────────────────────────────────────────────────────

pub fn encode_uf(uf: Uf) -> &'static str { uf.into() }

pub fn decode_uf(s: &str) -> Result<Uf> {
  Uf::from_str(s).map_err(|_| Error::Decode(format!("unknown uf: {s:?}")))
}

// ─── ContactKind ─────────────────────────────────────────────────────────────

pub fn encode_kind(kind: ContactKind) -> &'static str { kind.into() }

pub fn decode_kind(s: &str) -> Result<ContactKind> {
  ContactKind::from_str(s)
    .map_err(|_| Error::Decode(format!("unknown contact kind: {s:?}")))
}

// ─── Roles ───────────────────────────────────────────────────────────────────

pub fn encode_roles(roles: &[Role]) -> Result<String> {
  Ok(serde_json::to_string(roles)?)
}

pub fn decode_roles(s: &str) -> Result<Vec<Role>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const PERSON_COLUMNS: &str =
  "person_id, name, address, house_number, postal_code, city, uf";

/// Raw values read directly from a `persons` row.
pub struct RawPerson {
  pub person_id:    i64,
  pub name:         String,
  pub address:      Option<String>,
  pub house_number: Option<String>,
  pub postal_code:  Option<String>,
  pub city:         Option<String>,
  pub uf:           Option<String>,
}

impl RawPerson {
  /// Read the columns listed in [`PERSON_COLUMNS`], in order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      person_id:    row.get(0)?,
      name:         row.get(1)?,
      address:      row.get(2)?,
      house_number: row.get(3)?,
      postal_code:  row.get(4)?,
      city:         row.get(5)?,
      uf:           row.get(6)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      person_id:    self.person_id,
      name:         self.name,
      address:      self.address,
      house_number: self.house_number,
      postal_code:  self.postal_code,
      city:         self.city,
      uf:           self.uf.as_deref().map(decode_uf).transpose()?,
    })
  }
}

pub const CONTACT_COLUMNS: &str = "contact_id, person_id, kind, value";

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub contact_id: i64,
  pub person_id:  i64,
  pub kind:       String,
  pub value:      String,
}

impl RawContact {
  /// Read the columns listed in [`CONTACT_COLUMNS`], in order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      contact_id: row.get(0)?,
      person_id:  row.get(1)?,
      kind:       row.get(2)?,
      value:      row.get(3)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      contact_id: self.contact_id,
      person_id:  self.person_id,
      kind:       decode_kind(&self.kind)?,
      value:      self.value,
    })
  }
}

/// Raw values read directly from a `credentials` row.
pub struct RawCredential {
  pub person_id:     i64,
  pub email:         String,
  pub password_hash: String,
  pub roles:         String,
}

impl RawCredential {
  pub fn into_credential(self) -> Result<Credential> {
    Ok(Credential {
      person_id:     self.person_id,
      email:         self.email,
      password_hash: self.password_hash,
      roles:         decode_roles(&self.roles)?,
    })
  }
}
