// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for Processor service calls and server lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Incoming RPCs (start, completion, failure)
//! * Server start and shutdown

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// An RPC arrived and is being handled.
///
/// # Log Level
/// `debug!` - Per-call detail
///
/// # Example
/// ```
/// use processor_rpc::observability::messages::rpc::RpcStarted;
///
/// let msg = RpcStarted {
///     method: "GetNotifications",
///     request_size: 7,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct RpcStarted<'a> {
    pub method: &'a str,
    pub request_size: usize,
}

impl Display for RpcStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "RPC '{}' started: request_size={} bytes",
            self.method, self.request_size
        )
    }
}

impl StructuredLog for RpcStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            method = self.method,
            request_size = self.request_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "rpc",
            span_name = name,
            method = self.method,
            request_size = self.request_size,
        )
    }
}

/// An RPC completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RpcCompleted<'a> {
    pub method: &'a str,
    pub response_size: usize,
    pub duration: Duration,
}

impl Display for RpcCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "RPC '{}' completed: response_size={} bytes, duration={:?}",
            self.method, self.response_size, self.duration
        )
    }
}

impl StructuredLog for RpcCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            method = self.method,
            response_size = self.response_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "rpc_completed",
            span_name = name,
            method = self.method,
            duration = ?self.duration,
        )
    }
}

/// An RPC failed and is being returned to the caller as a status.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use processor_rpc::observability::messages::rpc::RpcFailed;
/// use processor_rpc::errors::NodeError;
///
/// let error = NodeError::UnknownUpstream("accounts".to_string());
/// let msg = RpcFailed {
///     method: "Prompt",
///     error: &error,
///     duration: std::time::Duration::from_millis(1),
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RpcFailed<'a> {
    pub method: &'a str,
    pub error: &'a dyn std::error::Error,
    pub duration: Duration,
}

impl Display for RpcFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "RPC '{}' failed after {:?}: {}",
            self.method, self.duration, self.error
        )
    }
}

impl StructuredLog for RpcFailed<'_> {
    fn log(&self) {
        tracing::error!(
            method = self.method,
            error = %self.error,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "rpc_failed",
            span_name = name,
            method = self.method,
            error = %self.error,
        )
    }
}

/// The Processor service is about to accept connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStarting<'a> {
    pub address: &'a str,
}

impl Display for ServerStarting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processor service listening on {}", self.address)
    }
}

impl StructuredLog for ServerStarting<'_> {
    fn log(&self) {
        tracing::info!(address = self.address, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name, address = self.address)
    }
}

/// The Processor service stopped accepting connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStopped<'a> {
    pub address: &'a str,
}

impl Display for ServerStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processor service on {} stopped", self.address)
    }
}

impl StructuredLog for ServerStopped<'_> {
    fn log(&self) {
        tracing::info!(address = self.address, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server_stopped", span_name = name, address = self.address)
    }
}
