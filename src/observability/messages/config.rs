// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// One problem found while validating a config file.
///
/// # Log Level
/// `error!` - The node will refuse the config
pub struct ConfigProblemFound<'a> {
    pub problem: &'a str,
}

impl Display for ConfigProblemFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config problem: {}", self.problem)
    }
}

impl StructuredLog for ConfigProblemFound<'_> {
    fn log(&self) {
        tracing::error!(problem = self.problem, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("config_validation", span_name = name)
    }
}
