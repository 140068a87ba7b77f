//! Field validation for person and contact input.
//!
//! Every check is a pure function returning [`Error`]. The composite
//! validators run their checks in a fixed order and stop at the first
//! violation, so a client always sees exactly one message.

use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{
  contact::ContactKind,
  dto::{ContactDto, PersonDto},
  error::{Error, Result},
  person::NewPerson,
  uf::Uf,
};

static LETTERS_AND_SPACES: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-záàãâéèêíóôúçÁÀÂÉÊÍÓÔÚÇ\s]+$")
    .expect("invalid letters regex")
});
static POSTAL_CODE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("invalid CEP regex"));
static PHONE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{10,11}$").expect("invalid phone regex"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
    .expect("invalid e-mail regex")
});
static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(https?://)?(www\.)?linkedin\.com/in/[A-Za-z0-9-]+$")
    .expect("invalid LinkedIn regex")
});

const KIND_LIST: &str = "TELEFONE_FIXO, CELULAR, EMAIL, LINKEDIN";

// ─── Person fields ───────────────────────────────────────────────────────────

/// Name is required, non-blank and made of letters and spaces only.
/// Returns the trimmed name.
pub fn validate_name(name: Option<&str>) -> Result<String> {
  let Some(name) = name else {
    return Err(Error::RequiredFieldMissing(
      "Campo nulo não permitido! Insira um nome.".into(),
    ));
  };
  let name = name.trim();
  if name.is_empty() {
    return Err(Error::EmptyField(
      "Campo vazio não permitido! Insira um nome.".into(),
    ));
  }
  if !LETTERS_AND_SPACES.is_match(name) {
    return Err(Error::InvalidFormat(
      "Nome inválido! Deve conter apenas letras.".into(),
    ));
  }
  Ok(name.to_owned())
}

/// Trim a free-text field; blank counts as absent.
fn non_blank(value: Option<&str>) -> Option<String> {
  value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

/// City is optional; when present it follows the same rule as the name.
/// Blank counts as absent. Returns the trimmed city.
pub fn validate_city(city: Option<&str>) -> Result<Option<String>> {
  match non_blank(city) {
    Some(city) if !LETTERS_AND_SPACES.is_match(&city) => {
      Err(Error::InvalidFormat(
        "Cidade inválida! Deve conter apenas letras.".into(),
      ))
    }
    city => Ok(city),
  }
}

/// Postal code (CEP) is optional; when present it must be `NNNNNNNN` or
/// `NNNNN-NNN`.
pub fn validate_postal_code(postal_code: Option<&str>) -> Result<()> {
  match postal_code {
    Some(cep) if !POSTAL_CODE.is_match(cep) => Err(Error::InvalidFormat(
      "CEP inválido! O formato correto é XXXXXXXX ou XXXXX-XXX.".into(),
    )),
    _ => Ok(()),
  }
}

/// UF is optional and case-insensitive. Blank counts as absent.
pub fn validate_state_code(uf: Option<&str>) -> Result<Option<Uf>> {
  let Some(uf) = uf.map(str::trim).filter(|s| !s.is_empty()) else {
    return Ok(None);
  };
  Uf::from_str(&uf.to_ascii_uppercase()).map(Some).map_err(|_| {
    Error::InvalidFormat(
      "UF inválido! Insira um estado válido. Exemplo: SP.".into(),
    )
  })
}

/// Validate a person request body and produce the fields to persist.
///
/// Order: name, city, postal code, UF.
pub fn validate_person(dto: &PersonDto) -> Result<NewPerson> {
  let name = validate_name(dto.name.as_deref())?;
  let city = validate_city(dto.city.as_deref())?;
  validate_postal_code(dto.postal_code.as_deref())?;
  let uf = validate_state_code(dto.uf.as_deref())?;

  Ok(NewPerson {
    name,
    address: non_blank(dto.address.as_deref()),
    house_number: non_blank(dto.house_number.as_deref()),
    postal_code: dto.postal_code.clone(),
    city,
    uf,
  })
}

// ─── Contact fields ──────────────────────────────────────────────────────────

fn missing_kind() -> Error {
  Error::RequiredFieldMissing(format!(
    "Erro! O tipo de contato não pode ser nulo. Insira um tipo de contato \
     válido: {KIND_LIST}."
  ))
}

pub fn validate_contact_kind(kind: Option<&str>) -> Result<ContactKind> {
  let Some(kind) = kind else {
    return Err(missing_kind());
  };
  ContactKind::from_str(kind.trim()).map_err(|_| {
    Error::InvalidFormat(format!(
      "Erro! Tipo de contato inválido. Insira um dos seguintes tipos: \
       {KIND_LIST}."
    ))
  })
}

/// Check `value` against the format its `kind` demands.
pub fn validate_contact_by_kind(kind: ContactKind, value: &str) -> Result<()> {
  let (pattern, message): (&Regex, &str) = match kind {
    ContactKind::TelefoneFixo | ContactKind::Celular => (
      &PHONE,
      "Erro! Formato inválido. Insira um telefone válido, incluindo o DDD.",
    ),
    ContactKind::Email => (
      &EMAIL,
      "Erro! Formato inválido. Insira um e-mail válido! Exemplo: \
       teste@email.com",
    ),
    ContactKind::Linkedin => (
      &LINKEDIN,
      "Erro! O formato do LinkedIn está inválido. Use um formato correto, \
       como: www.linkedin.com/in/usuario-linkedin",
    ),
  };
  if pattern.is_match(value) {
    Ok(())
  } else {
    Err(Error::InvalidFormat(message.into()))
  }
}

/// Validate a contact request body and return its parsed kind and trimmed
/// value. The owner id is checked by the service, not here.
///
/// Order: kind presence, value presence, value blankness, kind membership,
/// value format.
pub fn validate_contact(dto: &ContactDto) -> Result<(ContactKind, String)> {
  let Some(kind) = dto.kind.as_deref() else {
    return Err(missing_kind());
  };
  let Some(value) = dto.value.as_deref() else {
    return Err(Error::RequiredFieldMissing(
      "Erro! O contato não pode ser nulo. Insira um contato.".into(),
    ));
  };
  let value = value.trim();
  if value.is_empty() {
    return Err(Error::EmptyField(
      "Erro! O contato não pode ser vazio. Insira um contato.".into(),
    ));
  }
  let kind = validate_contact_kind(Some(kind))?;
  validate_contact_by_kind(kind, value)?;
  Ok((kind, value.to_owned()))
}
