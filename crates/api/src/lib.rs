//! Landscape API - Command and query interface for design sessions.
//!
//! This crate defines the typed command language for all design operations.
//! Commands represent user intent and are:
//! - Serializable (for recording, scripting, replay)
//! - Intent-based (what to do, not how to do it)
//!
//! # Example
//! ```ignore
//! use api::{Command, CatalogRef, execute_command};
//!
//! let cmd = Command::AddItem {
//!     item: CatalogRef::Name("Hosta".into()),
//!     position: Some(DesignPoint::new(20.0, 15.0)),
//! };
//! let result = execute_command(&mut session, cmd);
//! ```

mod command;
mod executor;
mod message;
mod query;
mod session;
mod target;

pub use command::*;
pub use executor::{execute_command, execute_query};
pub use message::process_message;
pub use query::*;
pub use session::Session;
pub use target::*;
