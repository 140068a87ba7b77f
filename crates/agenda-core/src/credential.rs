//! Login credentials and role memberships.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// A role granted to a credential; carried in issued tokens.
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
  EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
  Admin,
  Basic,
}

/// An e-mail + password pair attached to exactly one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
  pub person_id:     i64,
  pub email:         String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub roles:         Vec<Role>,
}

/// A credential whose person does not exist yet. Input to
/// [`crate::store::ContactStore::insert_person_with_credential`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCredential {
  pub email:         String,
  pub password_hash: String,
  pub roles:         Vec<Role>,
}

impl NewCredential {
  /// Attach the owner's store-assigned id.
  pub fn into_credential(self, person_id: i64) -> Credential {
    Credential {
      person_id,
      email: self.email,
      password_hash: self.password_hash,
      roles: self.roles,
    }
  }
}
