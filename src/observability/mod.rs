// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the processor node. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Keep log wording out of the call sites
//! * Attach the same structured fields every time an event is logged
//! * Give each event a single, greppable type name
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::rpc` - Processor service calls and server lifecycle
//! * `messages::node` - Peer bookkeeping and prompt fan-out
//! * `messages::registry` - Application method registration and dispatch
//! * `messages::client` - Outbound channel setup
//! * `messages::config` - Configuration validation problems
//!
//! # Usage
//!
//! ```rust
//! use processor_rpc::observability::messages::rpc::RpcFailed;
//! use processor_rpc::errors::NodeError;
//!
//! let error = NodeError::UnknownMethod("withdraw".to_string());
//! let msg = RpcFailed {
//!     method: "CallApplicationMethod",
//!     error: &error,
//!     duration: std::time::Duration::from_millis(3),
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
