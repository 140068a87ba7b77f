//! Person — a registered individual and the owner of contacts.

use serde::{Deserialize, Serialize};

use crate::uf::Uf;

/// A persisted person row.
///
/// Contacts are not embedded; they are loaded through
/// [`crate::store::ContactStore::list_contacts`] and are deleted together
/// with their owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub person_id:    i64,
  pub name:         String,
  pub address:      Option<String>,
  pub house_number: Option<String>,
  pub postal_code:  Option<String>,
  pub city:         Option<String>,
  pub uf:           Option<Uf>,
}

/// The mutable fields of a person, already validated.
///
/// Input to [`crate::store::ContactStore::insert_person`] and
/// [`crate::store::ContactStore::update_person`]. Only
/// [`crate::validation::validate_person`] produces one from client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
  pub name:         String,
  pub address:      Option<String>,
  pub house_number: Option<String>,
  pub postal_code:  Option<String>,
  pub city:         Option<String>,
  pub uf:           Option<Uf>,
}

impl NewPerson {
  /// Convenience constructor with every optional field unset.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:         name.into(),
      address:      None,
      house_number: None,
      postal_code:  None,
      city:         None,
      uf:           None,
    }
  }

  /// Attach the store-assigned id.
  pub fn into_person(self, person_id: i64) -> Person {
    Person {
      person_id,
      name: self.name,
      address: self.address,
      house_number: self.house_number,
      postal_code: self.postal_code,
      city: self.city,
      uf: self.uf,
    }
  }
}
