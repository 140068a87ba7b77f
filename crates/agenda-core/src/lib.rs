//! Core types, validation and services for the agenda contact backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

// Native `async fn` in traits; the `ContactStore` methods spell out their
// `Send` bounds explicitly.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod credential;
pub mod dto;
pub mod error;
pub mod person;
pub mod service;
pub mod store;
pub mod uf;
pub mod validation;

pub use error::{Error, Result};
