// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability-indexed dispatch for `CallApplicationMethod`.
//!
//! A [`MethodRegistry`] maps method names to [`ApplicationMethod`] handlers.
//! The registry never looks inside `args`, `kwargs` or the returned data; it
//! only selects the handler. [`JsonMethod`] is an optional adapter for
//! applications that agree on JSON payloads.

mod json;

pub use json::JsonMethod;

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{NodeError, NodeResult};
use crate::observability::messages::registry::{MethodRegistered, UnknownMethodCalled};
use crate::observability::messages::StructuredLog;
use crate::traits::ApplicationMethod;

/// Resolves method names to application handlers.
#[derive(Default, Clone)]
pub struct MethodRegistry {
    methods: HashMap<String, Arc<dyn ApplicationMethod>>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, returning the handler it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn ApplicationMethod>,
    ) -> Option<Arc<dyn ApplicationMethod>> {
        let name = name.into();
        let previous = self.methods.insert(name.clone(), handler);
        MethodRegistered {
            method_name: &name,
            replaced: previous.is_some(),
        }
        .log();
        previous
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, handler: Arc<dyn ApplicationMethod>) -> Self {
        self.register(name, handler);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered method names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Invoke the handler registered under `name` with the payloads as given.
    pub async fn dispatch(&self, name: &str, args: &str, kwargs: &str) -> NodeResult<String> {
        let Some(handler) = self.methods.get(name) else {
            UnknownMethodCalled {
                method_name: name,
                available: self.methods.len(),
            }
            .log();
            return Err(NodeError::UnknownMethod(name.to_string()));
        };

        handler.invoke(args, kwargs).await
    }
}

impl std::fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.names())
            .finish()
    }
}
