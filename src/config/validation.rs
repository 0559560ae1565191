// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::SocketAddr;

use tonic::transport::Endpoint;

use crate::config::consts::MAX_SECTION_SIZE;
use crate::config::Config;
use crate::observability::messages::{config::ConfigProblemFound, StructuredLog};

/// Validate a loaded configuration.
///
/// Returns every problem found rather than stopping at the first one, so a
/// single edit can fix a broken file.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    if cfg.node.get_name().trim().is_empty() {
        problems.push("node.name must not be empty".to_string());
    }

    let listen_address = cfg.node.get_listen_address();
    if listen_address.parse::<SocketAddr>().is_err() {
        problems.push(format!(
            "node.listen_address '{}' is not a socket address (host:port)",
            listen_address
        ));
    }

    let endpoint = cfg.client.get_endpoint();
    if Endpoint::from_shared(endpoint.to_string()).is_err() {
        problems.push(format!("client.endpoint '{}' is not a valid URI", endpoint));
    }

    if cfg.client.connect_timeout().is_zero() {
        problems.push("client.connect_timeout_ms must be greater than zero".to_string());
    }
    if cfg.client.request_timeout().is_zero() {
        problems.push("client.request_timeout_ms must be greater than zero".to_string());
    }

    let section_size = cfg.notifications.get_section_size();
    if section_size == 0 || section_size > MAX_SECTION_SIZE {
        problems.push(format!(
            "notifications.section_size {} must be between 1 and {}",
            section_size, MAX_SECTION_SIZE
        ));
    }

    for problem in &problems {
        ConfigProblemFound { problem }.log();
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
