//! # ABZ Agent API
//!
//! HTTP gateway for the ABZ website chatbot. The crate is thin glue:
//! request validation, CORS, environment configuration, and a call into
//! rig-core, which owns the model invocation and the bounded
//! tool-calling loop.
//!
//! ## Layout
//!
//! - `config`: settings loaded once from the environment
//! - `agent`: the cached chat agent, its factory, and orchestration
//! - `tools`: capabilities bridged into the agent (currently the clock)
//! - `memory`: per-conversation exchange history
//! - `gateway`: axum routes, schemas, and CORS policy

pub mod agent;
pub mod config;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod tools;

pub use config::Settings;
pub use error::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
