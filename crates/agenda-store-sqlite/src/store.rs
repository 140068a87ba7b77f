//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use agenda_core::{
  contact::{Contact, ContactKind, NewContact},
  credential::{Credential, NewCredential},
  person::{NewPerson, Person},
  store::ContactStore,
};

use crate::{
  encode::{
    encode_kind, encode_roles, encode_uf, RawContact, RawCredential,
    RawPerson, CONTACT_COLUMNS, PERSON_COLUMNS,
  },
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An agenda store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store. Useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn select_person(
  conn: &rusqlite::Connection,
  person_id: i64,
) -> rusqlite::Result<Option<RawPerson>> {
  conn
    .query_row(
      &format!("SELECT {PERSON_COLUMNS} FROM persons WHERE person_id = ?1"),
      rusqlite::params![person_id],
      RawPerson::from_row,
    )
    .optional()
}

fn select_contact(
  conn: &rusqlite::Connection,
  contact_id: i64,
) -> rusqlite::Result<Option<RawContact>> {
  conn
    .query_row(
      &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE contact_id = ?1"),
      rusqlite::params![contact_id],
      RawContact::from_row,
    )
    .optional()
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  // ── Persons ───────────────────────────────────────────────────────────────

  async fn insert_person(&self, input: NewPerson) -> Result<Person> {
    let row = input.clone();
    let uf_str = input.uf.map(encode_uf);

    let person_id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO persons (name, address, house_number, postal_code, city, uf)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.name,
            row.address,
            row.house_number,
            row.postal_code,
            row.city,
            uf_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_person(person_id))
  }

  async fn get_person(&self, person_id: i64) -> Result<Option<Person>> {
    let raw = self
      .conn
      .call(move |conn| Ok(select_person(conn, person_id)?))
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn list_persons(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PERSON_COLUMNS} FROM persons ORDER BY person_id"
        ))?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn update_person(
    &self,
    person_id: i64,
    input: NewPerson,
  ) -> Result<Option<Person>> {
    let uf_str = input.uf.map(encode_uf);

    let raw = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE persons
           SET name = ?2, address = ?3, house_number = ?4,
               postal_code = ?5, city = ?6, uf = ?7
           WHERE person_id = ?1",
          rusqlite::params![
            person_id,
            input.name,
            input.address,
            input.house_number,
            input.postal_code,
            input.city,
            uf_str,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_person(conn, person_id)?)
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn delete_person(&self, person_id: i64) -> Result<bool> {
    // Contacts and credential go with it via ON DELETE CASCADE.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM persons WHERE person_id = ?1",
          rusqlite::params![person_id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  async fn insert_contact(&self, input: NewContact) -> Result<Option<Contact>> {
    let kind_str = encode_kind(input.kind);
    let value = input.value.clone();
    let person_id = input.person_id;

    let inserted: Option<i64> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "INSERT INTO contacts (person_id, kind, value)
           SELECT ?1, ?2, ?3
           WHERE EXISTS (SELECT 1 FROM persons WHERE person_id = ?1)",
          rusqlite::params![person_id, kind_str, value],
        )?;
        Ok((changed > 0).then(|| conn.last_insert_rowid()))
      })
      .await?;

    Ok(inserted.map(|contact_id| Contact {
      contact_id,
      person_id: input.person_id,
      kind: input.kind,
      value: input.value,
    }))
  }

  async fn get_contact(&self, contact_id: i64) -> Result<Option<Contact>> {
    let raw = self
      .conn
      .call(move |conn| Ok(select_contact(conn, contact_id)?))
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list_contacts(&self, person_id: i64) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CONTACT_COLUMNS} FROM contacts
           WHERE person_id = ?1
           ORDER BY contact_id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![person_id], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn update_contact(
    &self,
    contact_id: i64,
    kind: ContactKind,
    value: String,
  ) -> Result<Option<Contact>> {
    let kind_str = encode_kind(kind);

    let raw = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE contacts SET kind = ?2, value = ?3 WHERE contact_id = ?1",
          rusqlite::params![contact_id, kind_str, value],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_contact(conn, contact_id)?)
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn delete_contact(&self, contact_id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![contact_id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  // ── Credentials ───────────────────────────────────────────────────────────

  async fn insert_person_with_credential(
    &self,
    person: NewPerson,
    credential: NewCredential,
  ) -> Result<(Person, Credential)> {
    let roles_str = encode_roles(&credential.roles)?;
    let uf_str = person.uf.map(encode_uf);
    let (person_row, credential_row) = (person.clone(), credential.clone());

    let person_id: i64 = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO persons (name, address, house_number, postal_code, city, uf)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            person_row.name,
            person_row.address,
            person_row.house_number,
            person_row.postal_code,
            person_row.city,
            uf_str,
          ],
        )?;
        let person_id = tx.last_insert_rowid();
        tx.execute(
          "INSERT INTO credentials (person_id, email, password_hash, roles)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![
            person_id,
            credential_row.email,
            credential_row.password_hash,
            roles_str,
          ],
        )?;
        // Dropping an uncommitted transaction rolls it back.
        tx.commit()?;
        Ok(person_id)
      })
      .await?;

    Ok((
      person.into_person(person_id),
      credential.into_credential(person_id),
    ))
  }

  async fn find_credential_by_email(
    &self,
    email: &str,
  ) -> Result<Option<Credential>> {
    let email = email.to_owned();

    let raw: Option<RawCredential> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT person_id, email, password_hash, roles
               FROM credentials WHERE email = ?1",
              rusqlite::params![email],
              |row| {
                Ok(RawCredential {
                  person_id:     row.get(0)?,
                  email:         row.get(1)?,
                  password_hash: row.get(2)?,
                  roles:         row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawCredential::into_credential).transpose()
  }
}
