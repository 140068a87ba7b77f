//! SQL schema for the agenda SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` is a per-connection setting, so it lives here rather than
/// in the database file.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS persons (
    person_id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    address       TEXT,
    house_number  TEXT,
    postal_code   TEXT,
    city          TEXT,
    uf            TEXT             -- two-letter state code or NULL
);

-- Contacts disappear with their owner.
CREATE TABLE IF NOT EXISTS contacts (
    contact_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id   INTEGER NOT NULL REFERENCES persons(person_id) ON DELETE CASCADE,
    kind        TEXT NOT NULL,     -- 'TELEFONE_FIXO' | 'CELULAR' | 'EMAIL' | 'LINKEDIN'
    value       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS credentials (
    person_id      INTEGER PRIMARY KEY REFERENCES persons(person_id) ON DELETE CASCADE,
    email          TEXT NOT NULL UNIQUE,
    password_hash  TEXT NOT NULL,  -- argon2 PHC string
    roles          TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS contacts_person_idx ON contacts(person_id);

PRAGMA user_version = 1;
";
