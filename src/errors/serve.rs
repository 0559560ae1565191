// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::AddrParseError;
use thiserror::Error;

/// Failures of a config-driven server run.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Invalid listen address '{address}': {source}")]
    ListenAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Server transport failed: {0}")]
    Transport(#[from] tonic::transport::Error),
}
