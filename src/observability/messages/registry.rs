// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for application method registration and dispatch.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An application method was added to the registry.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct MethodRegistered<'a> {
    pub method_name: &'a str,
    pub replaced: bool,
}

impl Display for MethodRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.replaced {
            write!(f, "Application method '{}' re-registered", self.method_name)
        } else {
            write!(f, "Application method '{}' registered", self.method_name)
        }
    }
}

impl StructuredLog for MethodRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            method_name = self.method_name,
            replaced = self.replaced,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("registry", span_name = name, method_name = self.method_name)
    }
}

/// A call named a method nobody registered.
///
/// # Log Level
/// `warn!` - Caller error
///
/// # Example
/// ```
/// use processor_rpc::observability::messages::registry::UnknownMethodCalled;
///
/// let msg = UnknownMethodCalled {
///     method_name: "withdraw",
///     available: 3,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownMethodCalled<'a> {
    pub method_name: &'a str,
    pub available: usize,
}

impl Display for UnknownMethodCalled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No application method '{}' among {} registered",
            self.method_name, self.available
        )
    }
}

impl StructuredLog for UnknownMethodCalled<'_> {
    fn log(&self) {
        tracing::warn!(
            method_name = self.method_name,
            available = self.available,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("registry", span_name = name, method_name = self.method_name)
    }
}
