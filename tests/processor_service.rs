// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Generated client against `ProcessorService<LocalNode>` on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use processor_rpc::errors::NodeResult;
use processor_rpc::node::{LocalNode, Prompted};
use processor_rpc::notifications::{LocalNotificationLog, Notification, NotificationReader, Section};
use processor_rpc::proto::processor_client::ProcessorClient;
use processor_rpc::proto::{
    CallRequest, Empty, FollowRequest, LeadRequest, NotificationsRequest, PromptRequest,
};
use processor_rpc::registry::{JsonMethod, MethodRegistry};
use processor_rpc::service::serve_with_listener;
use processor_rpc::traits::Peer;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tonic::transport::Channel;
use tonic::Code;

/// Twelve account events, ids 1..=12
struct BankLog;

#[async_trait]
impl NotificationReader for BankLog {
    async fn select_notifications(&self, start: u64, limit: u64) -> NodeResult<Vec<Notification>> {
        Ok((start..=12)
            .take(limit as usize)
            .map(|id| Notification {
                id,
                originator_id: format!("account-{}", (id - 1) / 4),
                originator_version: (id - 1) % 4 + 1,
                topic: "bankaccounts:Transaction".to_string(),
                state: format!("{{\"amount\":\"{}.00\"}}", id * 10),
            })
            .collect())
    }
}

struct TestNode {
    node: Arc<LocalNode>,
    client: ProcessorClient<Channel>,
    shutdown: CancellationToken,
    server: JoinHandle<Result<(), tonic::transport::Error>>,
}

impl TestNode {
    async fn start() -> Self {
        let registry = MethodRegistry::new().with(
            "deposit_funds",
            Arc::new(JsonMethod::new("deposit_funds", |args, kwargs| {
                let amount = args.first().and_then(|v| v.as_f64()).ok_or("amount required")?;
                let account = kwargs
                    .get("account_id")
                    .and_then(|v| v.as_str())
                    .unwrap_or("default");
                Ok(json!({ "account_id": account, "credited": amount }))
            })),
        );
        let log = LocalNotificationLog::with_section_size(Arc::new(BankLog), 5);
        let node = Arc::new(LocalNode::new("bank-accounts", registry, log));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        let server = tokio::spawn(serve_with_listener(listener, node.clone(), shutdown.clone()));

        let client = ProcessorClient::connect(format!("http://{}", addr))
            .await
            .unwrap();

        Self {
            node,
            client,
            shutdown,
            server,
        }
    }

    async fn stop(self) {
        drop(self.client);
        self.shutdown.cancel();
        self.server.abort();
    }
}

#[tokio::test]
async fn test_server_stops_on_cancel() {
    let node = Arc::new(LocalNode::new(
        "idle",
        MethodRegistry::new(),
        LocalNotificationLog::new(Arc::new(BankLog)),
    ));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let shutdown = CancellationToken::new();
    let server = tokio::spawn(serve_with_listener(listener, node, shutdown.clone()));

    shutdown.cancel();

    let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
        .await
        .expect("server did not stop after cancel");
    assert!(result.unwrap().is_ok());
}

#[tokio::test]
async fn test_ping() {
    let mut test = TestNode::start().await;

    let reply = test.client.ping(Empty {}).await.unwrap().into_inner();
    assert_eq!(reply, Empty {});

    test.stop().await;
}

#[tokio::test]
async fn test_follow_lead_and_prompt() {
    let mut test = TestNode::start().await;
    let mut prompts = test.node.subscribe();

    test.client
        .follow(FollowRequest {
            upstream_name: "orders".to_string(),
            upstream_address: "10.0.0.1:9000".to_string(),
        })
        .await
        .unwrap();
    test.client
        .lead(LeadRequest {
            downstream_name: "reporting".to_string(),
            downstream_address: "10.0.0.2:9000".to_string(),
        })
        .await
        .unwrap();
    test.client
        .prompt(PromptRequest {
            upstream_name: "orders".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(test.node.upstreams(), vec![Peer::new("orders", "10.0.0.1:9000")]);
    assert_eq!(test.node.downstreams(), vec![Peer::new("reporting", "10.0.0.2:9000")]);
    assert_eq!(
        prompts.recv().await.unwrap(),
        Prompted {
            upstream_name: "orders".to_string(),
            upstream_address: "10.0.0.1:9000".to_string(),
        }
    );

    let status = test
        .client
        .prompt(PromptRequest {
            upstream_name: "reporting".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    test.stop().await;
}

#[tokio::test]
async fn test_read_whole_log_by_following_next_ids() {
    let mut test = TestNode::start().await;

    let mut section_id = Some("1,5".to_string());
    let mut seen = Vec::new();
    while let Some(id) = section_id {
        let reply = test
            .client
            .get_notifications(NotificationsRequest { section_id: id })
            .await
            .unwrap()
            .into_inner();
        let section = Section::from_json(&reply.section).unwrap();
        seen.extend(section.items.iter().map(|n| n.id));
        section_id = section.next_id;
    }

    assert_eq!(seen, (1..=12).collect::<Vec<_>>());

    test.stop().await;
}

#[tokio::test]
async fn test_malformed_section_id_is_invalid_argument() {
    let mut test = TestNode::start().await;

    let status = test
        .client
        .get_notifications(NotificationsRequest {
            section_id: "latest".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().contains("latest"));

    test.stop().await;
}

#[tokio::test]
async fn test_call_application_method() {
    let mut test = TestNode::start().await;

    let reply = test
        .client
        .call_application_method(CallRequest {
            method_name: "deposit_funds".to_string(),
            args: "[100]".to_string(),
            kwargs: r#"{"account_id": "acc-7"}"#.to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    let data: serde_json::Value = serde_json::from_str(&reply.data).unwrap();
    assert_eq!(data, json!({ "account_id": "acc-7", "credited": 100.0 }));

    test.stop().await;
}

#[tokio::test]
async fn test_call_failures_map_to_status_codes() {
    let mut test = TestNode::start().await;

    let unknown = test
        .client
        .call_application_method(CallRequest {
            method_name: "withdraw_funds".to_string(),
            args: "[100]".to_string(),
            kwargs: "{}".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(unknown.code(), Code::NotFound);

    let bad_args = test
        .client
        .call_application_method(CallRequest {
            method_name: "deposit_funds".to_string(),
            args: "100".to_string(),
            kwargs: "{}".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(bad_args.code(), Code::InvalidArgument);

    let failed = test
        .client
        .call_application_method(CallRequest {
            method_name: "deposit_funds".to_string(),
            args: "[]".to_string(),
            kwargs: "{}".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(failed.code(), Code::Internal);
    assert!(failed.message().contains("amount required"));

    test.stop().await;
}
