//! Append-only prescription history ledger for Prescribe Engine
//!
//! The ledger is a single unbounded text file of past prescription events.
//! Entries are never mutated or deleted; reads return the entire file as one
//! opaque blob and appends are durable before they are reported complete.
//!
//! There is no indexing and no random access on purpose: the only consumers
//! are the generation workflow, which feeds the whole blob to the model as
//! context, and the history tool, which hands it to the caller verbatim.
//!
//! Appends from a single process are serialized by a process-wide lock so
//! concurrent workflow invocations cannot interleave bytes within a line.
//! Concurrent writers from *separate* processes may still interleave at the
//! byte level; that is an accepted limitation of the file format.

pub mod entry;
pub mod error;
pub mod ledger;

pub use entry::HistoryEntry;
pub use error::{LedgerError, LedgerResult};
pub use ledger::HistoryLedger;
