//! Prescription generation workflow for Prescribe Engine
//!
//! Composes patient lookup, historical context retrieval, prompt
//! construction, the external generation call, and durable history logging
//! into one unit with transactional feel:
//!
//! 1. Look the patient up; an unknown id fails fast with no side effects
//! 2. Read the full history ledger as best-effort context
//! 3. Build the prompt from the fixed clinical template
//! 4. Call the generation capability
//! 5. Prefer a caller-supplied final prescription over the machine draft
//! 6. Append the chosen prescription to the ledger, then return
//!
//! The ledger entry is written if and only if a prescription value was
//! finalized; nothing is logged for failed lookups or failed generation.

pub mod engine;
pub mod error;
pub mod prompt;

pub use engine::{PrescriptionEngine, PrescriptionOutcome, PrescriptionRequest};
pub use error::{EngineError, EngineResult};
pub use prompt::build_prompt;
