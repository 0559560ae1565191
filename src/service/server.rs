// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use crate::config::Config;
use crate::errors::ServeError;
use crate::observability::messages::rpc::{ServerStarting, ServerStopped};
use crate::observability::messages::StructuredLog;
use crate::service::ProcessorService;
use crate::traits::Node;

/// Serve `node` on `addr` until `shutdown` is cancelled.
pub async fn serve<N: Node + 'static>(
    addr: SocketAddr,
    node: Arc<N>,
    shutdown: CancellationToken,
) -> Result<(), tonic::transport::Error> {
    let address = addr.to_string();
    ServerStarting { address: &address }.log();

    Server::builder()
        .add_service(ProcessorService::new(node).into_server())
        .serve_with_shutdown(addr, shutdown.cancelled_owned())
        .await?;

    ServerStopped { address: &address }.log();
    Ok(())
}

/// Serve `node` on the configured `node.listen_address` until `shutdown` is
/// cancelled.
pub async fn serve_config<N: Node + 'static>(
    cfg: &Config,
    node: Arc<N>,
    shutdown: CancellationToken,
) -> Result<(), ServeError> {
    let address = cfg.node.get_listen_address();
    let addr: SocketAddr = address.parse().map_err(|source| ServeError::ListenAddress {
        address: address.to_string(),
        source,
    })?;

    serve(addr, node, shutdown).await?;
    Ok(())
}

/// Serve `node` on an already-bound listener until `shutdown` is cancelled.
///
/// Binding first lets callers use port 0 and learn the port before serving.
pub async fn serve_with_listener<N: Node + 'static>(
    listener: TcpListener,
    node: Arc<N>,
    shutdown: CancellationToken,
) -> Result<(), tonic::transport::Error> {
    let address = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    ServerStarting { address: &address }.log();

    Server::builder()
        .add_service(ProcessorService::new(node).into_server())
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown.cancelled_owned())
        .await?;

    ServerStopped { address: &address }.log();
    Ok(())
}
