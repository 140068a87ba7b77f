//! Business operations over a [`ContactStore`].
//!
//! Each service borrows the store for the duration of one request. They own
//! the "look up, validate, persist, map" sequence and turn missing rows into
//! typed [`Error`]s; handlers above them only translate errors to HTTP.

use tracing::{debug, info};

use crate::{
  contact::NewContact,
  credential::{Credential, NewCredential, Role},
  dto::{ContactDto, MailingDto, PersonDto},
  error::{Error, Result},
  person::NewPerson,
  store::ContactStore,
  validation::{validate_contact, validate_name, validate_person},
};

fn person_not_found(person_id: i64) -> Error {
  Error::NotFound(format!("Pessoa com ID {person_id} não encontrada"))
}

fn contact_not_found(contact_id: i64) -> Error {
  Error::NotFound(format!("Contato com ID {contact_id} não encontrado"))
}

// ─── Persons ─────────────────────────────────────────────────────────────────

pub struct PersonService<'a, S> {
  store: &'a S,
}

impl<'a, S: ContactStore> PersonService<'a, S> {
  pub fn new(store: &'a S) -> Self { Self { store } }

  pub async fn create(&self, dto: &PersonDto) -> Result<PersonDto> {
    let input = validate_person(dto)?;
    let person = self
      .store
      .insert_person(input)
      .await
      .map_err(Error::store)?;
    info!(person_id = person.person_id, "created person");
    Ok(PersonDto::from(&person))
  }

  pub async fn get(&self, person_id: i64) -> Result<PersonDto> {
    let person = self
      .store
      .get_person(person_id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| person_not_found(person_id))?;
    Ok(PersonDto::from(&person))
  }

  /// The person's address as a single mailing-label line.
  pub async fn mailing_view(&self, person_id: i64) -> Result<MailingDto> {
    let person = self
      .store
      .get_person(person_id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| person_not_found(person_id))?;
    Ok(MailingDto::from(&person))
  }

  /// Every person, ordered by id. An empty store is not an error.
  pub async fn list(&self) -> Result<Vec<PersonDto>> {
    let persons = self.store.list_persons().await.map_err(Error::store)?;
    Ok(persons.iter().map(PersonDto::from).collect())
  }

  /// Replace every field of an existing person.
  ///
  /// Existence is checked before validation, so an unknown id is reported
  /// as not found even when the body is also invalid.
  pub async fn update(
    &self,
    person_id: i64,
    dto: &PersonDto,
  ) -> Result<PersonDto> {
    if self
      .store
      .get_person(person_id)
      .await
      .map_err(Error::store)?
      .is_none()
    {
      return Err(person_not_found(person_id));
    }
    let input = validate_person(dto)?;
    let person = self
      .store
      .update_person(person_id, input)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| person_not_found(person_id))?;
    debug!(person_id, "updated person");
    Ok(PersonDto::from(&person))
  }

  /// Delete a person and, with it, every contact it owns.
  pub async fn delete(&self, person_id: i64) -> Result<()> {
    let deleted = self
      .store
      .delete_person(person_id)
      .await
      .map_err(Error::store)?;
    if !deleted {
      return Err(person_not_found(person_id));
    }
    info!(person_id, "deleted person");
    Ok(())
  }
}

// ─── Contacts ────────────────────────────────────────────────────────────────

pub struct ContactService<'a, S> {
  store: &'a S,
}

impl<'a, S: ContactStore> ContactService<'a, S> {
  pub fn new(store: &'a S) -> Self { Self { store } }

  /// Attach a new contact to an existing person. Nothing is written when
  /// the owner is missing or the body is invalid.
  pub async fn create(&self, dto: &ContactDto) -> Result<ContactDto> {
    let Some(person_id) = dto.person_id else {
      return Err(Error::RequiredFieldMissing(
        "Erro! O campo idPessoa não pode ser nulo.".into(),
      ));
    };
    if self
      .store
      .get_person(person_id)
      .await
      .map_err(Error::store)?
      .is_none()
    {
      return Err(person_not_found(person_id));
    }
    let (kind, value) = validate_contact(dto)?;

    // The owner may have been deleted since the check above.
    let contact = self
      .store
      .insert_contact(NewContact { person_id, kind, value })
      .await
      .map_err(Error::store)?
      .ok_or_else(|| person_not_found(person_id))?;
    info!(
      contact_id = contact.contact_id,
      person_id,
      kind = %contact.kind,
      "created contact"
    );
    Ok(ContactDto::from(&contact))
  }

  pub async fn get(&self, contact_id: i64) -> Result<ContactDto> {
    let contact = self
      .store
      .get_contact(contact_id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| contact_not_found(contact_id))?;
    Ok(ContactDto::from(&contact))
  }

  /// Contacts of one person, ordered by id. Fails with
  /// [`Error::NothingToList`] when the person exists but owns none.
  pub async fn list_by_person(&self, person_id: i64) -> Result<Vec<ContactDto>> {
    if self
      .store
      .get_person(person_id)
      .await
      .map_err(Error::store)?
      .is_none()
    {
      return Err(person_not_found(person_id));
    }
    let contacts = self
      .store
      .list_contacts(person_id)
      .await
      .map_err(Error::store)?;
    if contacts.is_empty() {
      return Err(Error::NothingToList(format!(
        "Nenhum contato associado à pessoa com ID {person_id}."
      )));
    }
    Ok(contacts.iter().map(ContactDto::from).collect())
  }

  /// Replace kind and value. `idPessoa` in the body is ignored.
  pub async fn update(
    &self,
    contact_id: i64,
    dto: &ContactDto,
  ) -> Result<ContactDto> {
    if self
      .store
      .get_contact(contact_id)
      .await
      .map_err(Error::store)?
      .is_none()
    {
      return Err(contact_not_found(contact_id));
    }
    let (kind, value) = validate_contact(dto)?;
    let contact = self
      .store
      .update_contact(contact_id, kind, value)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| contact_not_found(contact_id))?;
    debug!(contact_id, "updated contact");
    Ok(ContactDto::from(&contact))
  }

  pub async fn delete(&self, contact_id: i64) -> Result<()> {
    let deleted = self
      .store
      .delete_contact(contact_id)
      .await
      .map_err(Error::store)?;
    if !deleted {
      return Err(Error::NotFound(format!(
        "Contato com ID {contact_id} não encontrado para exclusão."
      )));
    }
    info!(contact_id, "deleted contact");
    Ok(())
  }
}

// ─── Credentials ─────────────────────────────────────────────────────────────

pub struct CredentialService<'a, S> {
  store: &'a S,
}

impl<'a, S: ContactStore> CredentialService<'a, S> {
  pub fn new(store: &'a S) -> Self { Self { store } }

  /// Look up the credential for `email` and check `password` against its
  /// stored hash with `verify(password, hash)`.
  ///
  /// Unknown e-mail and wrong password fail with the same message.
  pub async fn authenticate<F>(
    &self,
    email: &str,
    password: &str,
    verify: F,
  ) -> Result<Credential>
  where
    F: FnOnce(&str, &str) -> bool,
  {
    let bad = || Error::BadCredentials("Usuário ou senha inválida!".into());

    let credential = self
      .store
      .find_credential_by_email(email)
      .await
      .map_err(Error::store)?
      .ok_or_else(bad)?;
    if !verify(password, &credential.password_hash) {
      return Err(bad());
    }
    Ok(credential)
  }

  /// Create an administrator (a person plus an `ADMIN` credential) unless a
  /// credential for `email` already exists. Returns whether one was created.
  pub async fn ensure_admin(
    &self,
    name: &str,
    email: &str,
    password_hash: &str,
  ) -> Result<bool> {
    if self
      .store
      .find_credential_by_email(email)
      .await
      .map_err(Error::store)?
      .is_some()
    {
      info!(email, "admin already exists");
      return Ok(false);
    }

    let name = validate_name(Some(name))?;
    let (person, _) = self
      .store
      .insert_person_with_credential(NewPerson::new(name), NewCredential {
        email:         email.to_owned(),
        password_hash: password_hash.to_owned(),
        roles:         vec![Role::Admin],
      })
      .await
      .map_err(Error::store)?;
    info!(person_id = person.person_id, email, "created admin");
    Ok(true)
  }
}
