//! Integration tests for `SqliteStore` against an in-memory database, and
//! for the services in `agenda_core::service` running on top of it.

use agenda_core::{
  contact::{ContactKind, NewContact},
  credential::{NewCredential, Role},
  dto::{ContactDto, PersonDto},
  person::NewPerson,
  service::{ContactService, CredentialService, PersonService},
  store::ContactStore,
  uf::Uf,
  Error as CoreError,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn taina() -> NewPerson {
  NewPerson {
    address: Some("Rua Penha, 102".into()),
    house_number: Some("102".into()),
    postal_code: Some("06700-000".into()),
    city: Some("Cotia".into()),
    uf: Some(Uf::SP),
    ..NewPerson::new("Taina")
  }
}

fn cellphone(person_id: i64, value: &str) -> NewContact {
  NewContact {
    person_id,
    kind: ContactKind::Celular,
    value: value.into(),
  }
}

// ─── Persons ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_person() {
  let s = store().await;

  let person = s.insert_person(taina()).await.unwrap();
  assert!(person.person_id > 0);

  let fetched = s.get_person(person.person_id).await.unwrap().unwrap();
  assert_eq!(fetched, person);
  assert_eq!(fetched.uf, Some(Uf::SP));
}

#[tokio::test]
async fn get_person_missing_returns_none() {
  let s = store().await;
  assert!(s.get_person(999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_persons_is_ordered_by_id() {
  let s = store().await;
  assert!(s.list_persons().await.unwrap().is_empty());

  let a = s.insert_person(NewPerson::new("Ana")).await.unwrap();
  let b = s.insert_person(NewPerson::new("Bruno")).await.unwrap();

  let all = s.list_persons().await.unwrap();
  let ids: Vec<i64> = all.iter().map(|p| p.person_id).collect();
  assert_eq!(ids, vec![a.person_id, b.person_id]);
}

#[tokio::test]
async fn update_person_overwrites_every_field() {
  let s = store().await;
  let person = s.insert_person(taina()).await.unwrap();

  let updated = s
    .update_person(person.person_id, NewPerson::new("Taina Souza"))
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.person_id, person.person_id);
  assert_eq!(updated.name, "Taina Souza");
  assert_eq!(updated.city, None);
  assert_eq!(updated.uf, None);
}

#[tokio::test]
async fn update_person_missing_returns_none() {
  let s = store().await;
  let result = s.update_person(42, NewPerson::new("Ninguem")).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_person_cascades_to_contacts() {
  let s = store().await;
  let person = s.insert_person(taina()).await.unwrap();
  let contact = s
    .insert_contact(cellphone(person.person_id, "11974510719"))
    .await
    .unwrap()
    .unwrap();

  assert!(s.delete_person(person.person_id).await.unwrap());
  assert!(s.get_person(person.person_id).await.unwrap().is_none());
  assert!(s.get_contact(contact.contact_id).await.unwrap().is_none());
  assert!(!s.delete_person(person.person_id).await.unwrap());
}

// ─── Contacts ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_list_contacts() {
  let s = store().await;
  let owner = s.insert_person(taina()).await.unwrap();
  let other = s.insert_person(NewPerson::new("Outra")).await.unwrap();

  let first = s
    .insert_contact(cellphone(owner.person_id, "11974510719"))
    .await
    .unwrap()
    .unwrap();
  let second = s
    .insert_contact(NewContact {
      person_id: owner.person_id,
      kind:      ContactKind::Email,
      value:     "taina@email.com".into(),
    })
    .await
    .unwrap()
    .unwrap();
  s.insert_contact(cellphone(other.person_id, "11912345678"))
    .await
    .unwrap()
    .unwrap();

  let listed = s.list_contacts(owner.person_id).await.unwrap();
  assert_eq!(listed, vec![first, second]);
}

#[tokio::test]
async fn insert_contact_for_unknown_person_writes_nothing() {
  let s = store().await;
  assert!(
    s.insert_contact(cellphone(999, "11974510719"))
      .await
      .unwrap()
      .is_none()
  );

  // An owner deleted between lookup and insert is reported the same way.
  let owner = s.insert_person(taina()).await.unwrap();
  s.delete_person(owner.person_id).await.unwrap();
  assert!(
    s.insert_contact(cellphone(owner.person_id, "11974510719"))
      .await
      .unwrap()
      .is_none()
  );
  assert!(s.list_contacts(owner.person_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_contact_keeps_owner() {
  let s = store().await;
  let owner = s.insert_person(taina()).await.unwrap();
  let contact = s
    .insert_contact(cellphone(owner.person_id, "11974510719"))
    .await
    .unwrap()
    .unwrap();

  let updated = s
    .update_contact(
      contact.contact_id,
      ContactKind::Linkedin,
      "www.linkedin.com/in/taina".into(),
    )
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.person_id, owner.person_id);
  assert_eq!(updated.kind, ContactKind::Linkedin);
  assert_eq!(updated.value, "www.linkedin.com/in/taina");

  assert!(
    s.update_contact(999, ContactKind::Email, "a@b.co".into())
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn delete_contact_reports_whether_a_row_went_away() {
  let s = store().await;
  let owner = s.insert_person(taina()).await.unwrap();
  let contact = s
    .insert_contact(cellphone(owner.person_id, "11974510719"))
    .await
    .unwrap()
    .unwrap();

  assert!(s.delete_contact(contact.contact_id).await.unwrap());
  assert!(!s.delete_contact(contact.contact_id).await.unwrap());
  assert!(s.get_person(owner.person_id).await.unwrap().is_some());
}

// ─── Credentials ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn person_with_credential_round_trips() {
  let s = store().await;
  let (person, credential) = s
    .insert_person_with_credential(NewPerson::new("Admin"), NewCredential {
      email:         "admin@agenda.local".into(),
      password_hash: "$argon2id$stub".into(),
      roles:         vec![Role::Admin, Role::Basic],
    })
    .await
    .unwrap();
  assert_eq!(credential.person_id, person.person_id);
  assert_eq!(s.get_person(person.person_id).await.unwrap(), Some(person));

  let found = s
    .find_credential_by_email("admin@agenda.local")
    .await
    .unwrap();
  assert_eq!(found, Some(credential));
  assert!(s.find_credential_by_email("x@y.z").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_leaves_no_orphan_person() {
  let s = store().await;
  let admin = || NewCredential {
    email:         "admin@agenda.local".into(),
    password_hash: "$argon2id$stub".into(),
    roles:         vec![Role::Admin],
  };
  s.insert_person_with_credential(NewPerson::new("Admin"), admin())
    .await
    .unwrap();
  let before = s.list_persons().await.unwrap();

  assert!(
    s.insert_person_with_credential(NewPerson::new("Outro"), admin())
      .await
      .is_err()
  );
  assert_eq!(s.list_persons().await.unwrap(), before);
}

// ─── Person service ──────────────────────────────────────────────────────────

fn person_dto(name: &str) -> PersonDto {
  PersonDto {
    name: Some(name.into()),
    address: Some("Rua Penha, 102".into()),
    house_number: Some("102".into()),
    postal_code: Some("06700-000".into()),
    city: Some("Cotia".into()),
    uf: Some("SP".into()),
    ..Default::default()
  }
}

#[tokio::test]
async fn person_service_create_assigns_id_and_echoes_fields() {
  let s = store().await;
  let svc = PersonService::new(&s);

  let created = svc.create(&person_dto("Taina")).await.unwrap();
  let id = created.id.unwrap();
  assert_eq!(created, PersonDto { id: Some(id), ..person_dto("Taina") });
  assert_eq!(svc.get(id).await.unwrap(), created);
}

#[tokio::test]
async fn person_service_rejects_invalid_input_without_writing() {
  let s = store().await;
  let svc = PersonService::new(&s);

  let dto = PersonDto { postal_code: Some("123".into()), ..person_dto("Taina") };
  assert!(matches!(svc.create(&dto).await, Err(CoreError::InvalidFormat(_))));
  assert!(svc.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn person_service_missing_ids_are_not_found() {
  let s = store().await;
  let svc = PersonService::new(&s);

  let err = svc.get(999).await.unwrap_err();
  assert_eq!(err.to_string(), "Pessoa com ID 999 não encontrada");
  assert!(matches!(svc.mailing_view(999).await, Err(CoreError::NotFound(_))));
  assert!(matches!(
    svc.update(999, &person_dto("Taina")).await,
    Err(CoreError::NotFound(_))
  ));
  assert!(matches!(svc.delete(999).await, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn person_service_mailing_view() {
  let s = store().await;
  let svc = PersonService::new(&s);
  let id = svc.create(&person_dto("Taina")).await.unwrap().id.unwrap();

  let view = svc.mailing_view(id).await.unwrap();
  assert_eq!(view.person_id, id);
  assert_eq!(view.name, "Taina");
  assert_eq!(view.label, "Rua Penha, 102 – CEP: 06700-000 – Cotia / SP");
}

#[tokio::test]
async fn person_service_update_replaces_fields() {
  let s = store().await;
  let svc = PersonService::new(&s);
  let id = svc.create(&person_dto("Taina")).await.unwrap().id.unwrap();

  let body = PersonDto { uf: Some("rj".into()), ..person_dto("Taina Souza") };
  let updated = svc.update(id, &body).await.unwrap();
  assert_eq!(updated.id, Some(id));
  assert_eq!(updated.name.as_deref(), Some("Taina Souza"));
  assert_eq!(updated.uf.as_deref(), Some("RJ"));
}

// ─── Contact service ─────────────────────────────────────────────────────────

fn contact_dto(person_id: Option<i64>, kind: &str, value: &str) -> ContactDto {
  ContactDto {
    kind: Some(kind.into()),
    value: Some(value.into()),
    person_id,
    ..Default::default()
  }
}

#[tokio::test]
async fn contact_service_create_for_existing_person() {
  let s = store().await;
  let owner = PersonService::new(&s)
    .create(&person_dto("Taina"))
    .await
    .unwrap()
    .id
    .unwrap();
  let svc = ContactService::new(&s);

  let created = svc
    .create(&contact_dto(Some(owner), "CELULAR", "11974510719"))
    .await
    .unwrap();
  assert!(created.id.is_some());
  assert_eq!(created.kind.as_deref(), Some("CELULAR"));
  assert_eq!(created.person_id, Some(owner));
  assert_eq!(svc.list_by_person(owner).await.unwrap(), vec![created]);
}

#[tokio::test]
async fn contact_service_unknown_owner_writes_nothing() {
  let s = store().await;
  let svc = ContactService::new(&s);

  let err = svc
    .create(&contact_dto(Some(999), "CELULAR", "11974510719"))
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Pessoa com ID 999 não encontrada");
  assert!(s.list_contacts(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_service_requires_owner_id() {
  let s = store().await;
  let err = ContactService::new(&s)
    .create(&contact_dto(None, "CELULAR", "11974510719"))
    .await
    .unwrap_err();
  assert!(matches!(err, CoreError::RequiredFieldMissing(_)));
  assert_eq!(err.to_string(), "Erro! O campo idPessoa não pode ser nulo.");
}

#[tokio::test]
async fn contact_service_rejects_short_phone() {
  let s = store().await;
  let owner = PersonService::new(&s)
    .create(&person_dto("Taina"))
    .await
    .unwrap()
    .id
    .unwrap();

  let err = ContactService::new(&s)
    .create(&contact_dto(Some(owner), "CELULAR", "12345"))
    .await
    .unwrap_err();
  assert!(matches!(err, CoreError::InvalidFormat(_)));
  assert!(s.list_contacts(owner).await.unwrap().is_empty());
}

#[tokio::test]
async fn contact_service_list_by_person() {
  let s = store().await;
  let persons = PersonService::new(&s);
  let contacts = ContactService::new(&s);
  let owner = persons.create(&person_dto("Taina")).await.unwrap().id.unwrap();

  assert!(matches!(
    contacts.list_by_person(owner).await,
    Err(CoreError::NothingToList(m)) if m == format!("Nenhum contato associado à pessoa com ID {owner}.")
  ));

  contacts
    .create(&contact_dto(Some(owner), "EMAIL", "taina@email.com"))
    .await
    .unwrap();
  persons.delete(owner).await.unwrap();

  assert!(matches!(
    contacts.list_by_person(owner).await,
    Err(CoreError::NotFound(_))
  ));
}

#[tokio::test]
async fn contact_service_update_and_delete() {
  let s = store().await;
  let owner = PersonService::new(&s)
    .create(&person_dto("Taina"))
    .await
    .unwrap()
    .id
    .unwrap();
  let svc = ContactService::new(&s);
  let id = svc
    .create(&contact_dto(Some(owner), "CELULAR", "11974510719"))
    .await
    .unwrap()
    .id
    .unwrap();

  // The owner in an update body is ignored.
  let updated = svc
    .update(id, &contact_dto(Some(999), "TELEFONE_FIXO", "1145678901"))
    .await
    .unwrap();
  assert_eq!(updated.kind.as_deref(), Some("TELEFONE_FIXO"));
  assert_eq!(updated.person_id, Some(owner));

  svc.delete(id).await.unwrap();
  let err = svc.delete(id).await.unwrap_err();
  assert_eq!(
    err.to_string(),
    format!("Contato com ID {id} não encontrado para exclusão.")
  );
  assert_eq!(
    svc.get(id).await.unwrap_err().to_string(),
    format!("Contato com ID {id} não encontrado")
  );
}

// ─── Credential service ──────────────────────────────────────────────────────

#[tokio::test]
async fn ensure_admin_is_idempotent() {
  let s = store().await;
  let svc = CredentialService::new(&s);

  assert!(svc.ensure_admin("Administrador", "admin@agenda.local", "h").await.unwrap());
  assert!(!svc.ensure_admin("Administrador", "admin@agenda.local", "h").await.unwrap());

  let credential = s
    .find_credential_by_email("admin@agenda.local")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(credential.roles, vec![Role::Admin]);
  assert_eq!(s.list_persons().await.unwrap().len(), 1);
}

#[tokio::test]
async fn authenticate_hides_which_part_was_wrong() {
  let s = store().await;
  let svc = CredentialService::new(&s);
  svc.ensure_admin("Administrador", "admin@agenda.local", "secret").await.unwrap();

  let check = |password: &str, hash: &str| password == hash;

  let ok = svc.authenticate("admin@agenda.local", "secret", check).await.unwrap();
  assert_eq!(ok.email, "admin@agenda.local");

  let wrong_password = svc
    .authenticate("admin@agenda.local", "nope", check)
    .await
    .unwrap_err();
  let unknown_email = svc
    .authenticate("ghost@agenda.local", "secret", check)
    .await
    .unwrap_err();
  assert!(matches!(wrong_password, CoreError::BadCredentials(_)));
  assert_eq!(wrong_password.to_string(), unknown_email.to_string());
  assert_eq!(unknown_email.to_string(), "Usuário ou senha inválida!");
}
