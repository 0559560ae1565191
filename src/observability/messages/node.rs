// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for peer bookkeeping and prompt fan-out.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A peer was recorded as upstream or downstream.
///
/// # Log Level
/// `info!` - Topology change
///
/// # Example
/// ```
/// use processor_rpc::observability::messages::node::PeerRegistered;
///
/// let msg = PeerRegistered {
///     role: "downstream",
///     name: "reporting",
///     address: "reporting:50051",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PeerRegistered<'a> {
    pub role: &'a str,
    pub name: &'a str,
    pub address: &'a str,
}

impl Display for PeerRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered {} '{}' at {}",
            self.role, self.name, self.address
        )
    }
}

impl StructuredLog for PeerRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            role = self.role,
            peer_name = self.name,
            peer_address = self.address,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "peer",
            span_name = name,
            role = self.role,
            peer_name = self.name,
        )
    }
}

/// A peer already known under the same name was given a new address.
///
/// # Log Level
/// `warn!` - Unexpected but recoverable
pub struct PeerReplaced<'a> {
    pub role: &'a str,
    pub name: &'a str,
    pub previous_address: &'a str,
    pub address: &'a str,
}

impl Display for PeerReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Replaced {} '{}': {} -> {}",
            self.role, self.name, self.previous_address, self.address
        )
    }
}

impl StructuredLog for PeerReplaced<'_> {
    fn log(&self) {
        tracing::warn!(
            role = self.role,
            peer_name = self.name,
            previous_address = self.previous_address,
            peer_address = self.address,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "peer_replaced",
            span_name = name,
            role = self.role,
            peer_name = self.name,
        )
    }
}

/// A prompt from an upstream was handed to subscribers.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct PromptPublished<'a> {
    pub upstream_name: &'a str,
    pub upstream_address: &'a str,
    pub subscriber_count: usize,
}

impl Display for PromptPublished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Prompt from '{}' at {} delivered to {} subscriber(s)",
            self.upstream_name, self.upstream_address, self.subscriber_count
        )
    }
}

impl StructuredLog for PromptPublished<'_> {
    fn log(&self) {
        tracing::debug!(
            upstream_name = self.upstream_name,
            upstream_address = self.upstream_address,
            subscriber_count = self.subscriber_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "prompt",
            span_name = name,
            upstream_name = self.upstream_name,
        )
    }
}
