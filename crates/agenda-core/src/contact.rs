//! Contact — one communication channel owned by a person.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The channel a contact value belongs to. The value's required format
/// depends on the kind; see [`crate::validation::validate_contact_by_kind`].
///
/// On the wire and in the database the kinds are spelled
/// `TELEFONE_FIXO`, `CELULAR`, `EMAIL` and `LINKEDIN`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ContactKind {
  /// Landline.
  TelefoneFixo,
  /// Cellphone.
  Celular,
  Email,
  Linkedin,
}

/// A persisted contact row. `person_id` always references an existing
/// person; the row is removed when its owner is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub contact_id: i64,
  pub person_id:  i64,
  pub kind:       ContactKind,
  pub value:      String,
}

/// Input to [`crate::store::ContactStore::insert_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub person_id: i64,
  pub kind:      ContactKind,
  pub value:     String,
}
