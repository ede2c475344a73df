// Patient directory models
use serde::{Deserialize, Serialize};

/// A patient record as stored in the directory.
///
/// Records are created by the external import process and never mutated by
/// the prescription core. `id` is externally assigned and unique; matching is
/// exact-string, case-sensitive. `history` holds free-text prior conditions
/// in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub diagnosis: String,
    pub history: Vec<String>,
}
