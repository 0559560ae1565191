// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The gRPC face of a [`Node`].
//!
//! [`ProcessorService`] implements the generated `Processor` server trait by
//! unpacking each request into domain arguments, calling the node, and packing
//! the result. Payload strings pass through untouched. Node errors leave as
//! status codes, since the contract has no error messages of its own.

mod server;

pub use server::{serve, serve_config, serve_with_listener};

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use prost::Message;
use tonic::{Request, Response, Status};
use tracing::Instrument;

use crate::errors::NodeResult;
use crate::observability::messages::rpc::{RpcCompleted, RpcFailed, RpcStarted};
use crate::observability::messages::StructuredLog;
use crate::proto::processor_server::{Processor, ProcessorServer};
use crate::proto::{
    CallReply, CallRequest, Empty, FollowRequest, LeadRequest, NotificationsReply,
    NotificationsRequest, PromptRequest,
};
use crate::traits::{Node, Peer};

pub struct ProcessorService<N> {
    node: Arc<N>,
}

impl<N: Node + 'static> ProcessorService<N> {
    pub fn new(node: Arc<N>) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &Arc<N> {
        &self.node
    }

    /// Wrap in the generated tower service, ready for `Server::add_service`.
    pub fn into_server(self) -> ProcessorServer<Self> {
        ProcessorServer::new(self)
    }
}

impl<N> Clone for ProcessorService<N> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

/// Run one call with start/finish logging and error-to-status conversion.
async fn observe<T, F>(method: &'static str, request_size: usize, call: F) -> Result<Response<T>, Status>
where
    T: Message,
    F: Future<Output = NodeResult<T>>,
{
    let started = RpcStarted {
        method,
        request_size,
    };
    let span = started.span("processor_rpc");
    started.log();

    let start_time = Instant::now();
    let result = call.instrument(span).await;
    let duration = start_time.elapsed();

    match result {
        Ok(reply) => {
            RpcCompleted {
                method,
                response_size: reply.encoded_len(),
                duration,
            }
            .log();
            Ok(Response::new(reply))
        }
        Err(error) => {
            RpcFailed {
                method,
                error: &error,
                duration,
            }
            .log();
            Err(error.into())
        }
    }
}

#[tonic::async_trait]
impl<N: Node + 'static> Processor for ProcessorService<N> {
    async fn ping(&self, _request: Request<Empty>) -> Result<Response<Empty>, Status> {
        observe("Ping", 0, async move { self.node.ping().await.map(|()| Empty {}) }).await
    }

    async fn follow(&self, request: Request<FollowRequest>) -> Result<Response<Empty>, Status> {
        let request = request.into_inner();
        let size = request.encoded_len();
        observe("Follow", size, async move {
            let upstream = Peer::new(request.upstream_name, request.upstream_address);
            self.node.follow(upstream).await.map(|()| Empty {})
        })
        .await
    }

    async fn lead(&self, request: Request<LeadRequest>) -> Result<Response<Empty>, Status> {
        let request = request.into_inner();
        let size = request.encoded_len();
        observe("Lead", size, async move {
            let downstream = Peer::new(request.downstream_name, request.downstream_address);
            self.node.lead(downstream).await.map(|()| Empty {})
        })
        .await
    }

    async fn prompt(&self, request: Request<PromptRequest>) -> Result<Response<Empty>, Status> {
        let request = request.into_inner();
        let size = request.encoded_len();
        observe("Prompt", size, async move {
            self.node
                .prompt(&request.upstream_name)
                .await
                .map(|()| Empty {})
        })
        .await
    }

    async fn get_notifications(
        &self,
        request: Request<NotificationsRequest>,
    ) -> Result<Response<NotificationsReply>, Status> {
        let request = request.into_inner();
        let size = request.encoded_len();
        observe("GetNotifications", size, async move {
            let section = self.node.notifications(&request.section_id).await?;
            Ok(NotificationsReply { section })
        })
        .await
    }

    async fn call_application_method(
        &self,
        request: Request<CallRequest>,
    ) -> Result<Response<CallReply>, Status> {
        let request = request.into_inner();
        let size = request.encoded_len();
        observe("CallApplicationMethod", size, async move {
            let data = self
                .node
                .call(&request.method_name, &request.args, &request.kwargs)
                .await?;
            Ok(CallReply { data })
        })
        .await
    }
}
