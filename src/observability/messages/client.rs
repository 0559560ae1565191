// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for outbound channels.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Dialing a remote node.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ClientConnecting<'a> {
    pub endpoint: &'a str,
    pub connect_timeout: Duration,
}

impl Display for ClientConnecting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connecting to {} (timeout {:?})",
            self.endpoint, self.connect_timeout
        )
    }
}

impl StructuredLog for ClientConnecting<'_> {
    fn log(&self) {
        tracing::info!(
            endpoint = self.endpoint,
            connect_timeout_ms = self.connect_timeout.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("client", span_name = name, endpoint = self.endpoint)
    }
}

/// The channel to a remote node could not be established.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ClientConnectFailed<'a> {
    pub endpoint: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ClientConnectFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to connect to {}: {}", self.endpoint, self.error)
    }
}

impl StructuredLog for ClientConnectFailed<'_> {
    fn log(&self) {
        tracing::error!(endpoint = self.endpoint, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("client", span_name = name, endpoint = self.endpoint)
    }
}
