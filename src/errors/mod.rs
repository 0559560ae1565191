// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod node;
mod section;
mod serve;

pub use config::ConfigError;
pub use node::{NodeError, NodeResult};
pub use section::SectionIdError;
pub use serve::ServeError;
