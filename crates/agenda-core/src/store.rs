//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `agenda-store-sqlite`).
//! The services in [`crate::service`] and everything above them depend on
//! this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, ContactKind, NewContact},
  credential::{Credential, NewCredential},
  person::{NewPerson, Person},
};

/// Abstraction over an agenda storage backend.
///
/// Lookups return `Ok(None)` for a missing row and mutations report whether
/// a row was touched; turning absence into a business failure is the
/// services' job.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Persons ───────────────────────────────────────────────────────────

  /// Persist a new person; the store assigns the id.
  fn insert_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  fn get_person(
    &self,
    person_id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// All persons, ordered by id.
  fn list_persons(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field. Returns `None` if the person does not
  /// exist.
  fn update_person(
    &self,
    person_id: i64,
    input: NewPerson,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Delete a person together with its contacts and credential. Returns
  /// `false` if nothing was deleted.
  fn delete_person(
    &self,
    person_id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// Persist a new contact. The owner check and the insert are one
  /// statement; returns `None` and writes nothing if the owner does not
  /// exist.
  fn insert_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  fn get_contact(
    &self,
    contact_id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Contacts owned by `person_id`, ordered by id.
  fn list_contacts(
    &self,
    person_id: i64,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Replace a contact's kind and value. The owner never changes. Returns
  /// `None` if the contact does not exist.
  fn update_contact(
    &self,
    contact_id: i64,
    kind: ContactKind,
    value: String,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  fn delete_contact(
    &self,
    contact_id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Credentials ───────────────────────────────────────────────────────

  /// Persist a person and its credential atomically. Fails, writing
  /// neither row, if the e-mail is already taken.
  fn insert_person_with_credential(
    &self,
    person: NewPerson,
    credential: NewCredential,
  ) -> impl Future<Output = Result<(Person, Credential), Self::Error>> + Send + '_;

  fn find_credential_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Credential>, Self::Error>> + Send + 'a;
}
