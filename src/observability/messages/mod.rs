// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at the right level with its fields attached.
//!
//! # Usage Pattern
//!
//! ```rust
//! use processor_rpc::observability::messages::{node::PeerRegistered, StructuredLog};
//!
//! let msg = PeerRegistered {
//!     role: "upstream",
//!     name: "accounts",
//!     address: "10.0.0.1:9000",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod client;
pub mod config;
pub mod node;
pub mod registry;
pub mod rpc;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
