// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Channel setup for talking to a remote node.
//!
//! Calls go straight through the generated [`ProcessorClient`]; nothing here
//! retries or reconnects.

use tonic::transport::{Channel, Endpoint};

use crate::config::ClientConfig;
use crate::observability::messages::client::{ClientConnectFailed, ClientConnecting};
use crate::observability::messages::StructuredLog;
use crate::proto::processor_client::ProcessorClient;

/// Build the endpoint described by `cfg` without connecting.
pub fn endpoint(cfg: &ClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    Ok(Endpoint::from_shared(cfg.get_endpoint().to_string())?
        .connect_timeout(cfg.connect_timeout())
        .timeout(cfg.request_timeout()))
}

/// Connect to the node described by `cfg`.
pub async fn connect(cfg: &ClientConfig) -> Result<ProcessorClient<Channel>, tonic::transport::Error> {
    let target = cfg.get_endpoint();
    ClientConnecting {
        endpoint: target,
        connect_timeout: cfg.connect_timeout(),
    }
    .log();

    let channel = match endpoint(cfg)?.connect().await {
        Ok(channel) => channel,
        Err(error) => {
            ClientConnectFailed {
                endpoint: target,
                error: &error,
            }
            .log();
            return Err(error);
        }
    };

    Ok(ProcessorClient::new(channel))
}

/// A client whose channel connects on first use.
pub fn connect_lazy(cfg: &ClientConfig) -> Result<ProcessorClient<Channel>, tonic::transport::Error> {
    Ok(ProcessorClient::new(endpoint(cfg)?.connect_lazy()))
}
