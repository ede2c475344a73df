//! Model Context Protocol (MCP) server for Prescribe Engine
//!
//! Exposes the prescription workflow to AI agents and clients as a small
//! fixed set of named tools over newline-delimited JSON-RPC on stdio.
//!
//! # Tools
//!
//! - **get_all_patients**: list every patient record
//! - **get_patient_by_id**: fetch one patient by identifier
//! - **generate_prescription**: run the full generation workflow
//! - **get_prescription_history**: read the prescription ledger verbatim
//!
//! # Architecture
//!
//! The server side composes a static [`registry::ToolRegistry`] (the tool
//! catalog), a [`tools::ToolDispatcher`] (argument validation, routing, and
//! the uniform result envelope), and a [`server::McpServer`] (the stdio
//! message loop). The client side ([`client::McpClient`]) spawns the server
//! as a child process and correlates concurrent in-flight calls by request
//! id; the REST proxy and the ops CLI both ride on it.
//!
//! Every per-call fault is converted into a failure envelope at the
//! dispatcher boundary. Only missing startup configuration terminates the
//! process.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod tools;

pub use client::McpClient;
pub use config::ServerConfig;
pub use error::{McpError, McpResult};
pub use protocol::*;
pub use registry::ToolRegistry;
pub use server::McpServer;
pub use tools::{ServiceContext, ToolDispatcher, ToolRequest};
