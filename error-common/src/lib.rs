//! Common error handling utilities for Prescribe Engine
//!
//! This module provides the standardized error types used across all
//! Prescribe Engine crates. It ensures consistent error handling and a
//! uniform failure taxonomy that callers can branch on without parsing
//! message text.
//!
//! # Error Categories
//!
//! - **Validation**: missing or malformed arguments, caught at the tool
//!   dispatch boundary
//! - **NotFound**: a lookup by identifier had no match
//! - **Upstream**: the generation capability or a backing store is
//!   unavailable or misbehaving
//! - **Internal**: unexpected faults inside a handler
//! - **Config**: missing required configuration; fatal at startup and never
//!   reported through a per-call failure envelope

pub mod types;

pub use types::*;
