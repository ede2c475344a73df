//! Patient record store abstraction for Prescribe Engine
//!
//! The patient directory is populated by an external one-shot import process
//! and is read-only to the prescription core. This crate exposes the store as
//! an opaque keyed lookup behind the [`PatientRepository`] trait:
//!
//! - `find_by_id`: exact-string match on the externally assigned patient id
//! - `list_all`: full listing, stable order within a process lifetime
//!
//! Two implementations are provided: [`PostgresPatientRepository`] backed by
//! sqlx, and [`InMemoryPatientRepository`] for tests and local development.
//! Bulk replacement (`replace_all`) lives on the Postgres implementation only
//! because the import tool is the sole writer.

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;

pub use error::{DatabaseError, DatabaseResult};
pub use memory::InMemoryPatientRepository;
pub use models::Patient;
pub use repository::{PatientRepository, PostgresPatientRepository};
