// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A bookkeeping [`Node`]: records peers, fans prompts out to subscribers,
//! serves notification sections from a reader and dispatches calls through a
//! [`MethodRegistry`]. It does not pull from upstreams or push to downstreams;
//! a host application subscribes to prompts and does that itself.

mod peers;

pub use peers::PeerTable;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::config::consts::PROMPT_CHANNEL_CAPACITY;
use crate::config::Config;
use crate::errors::{NodeError, NodeResult};
use crate::notifications::{LocalNotificationLog, NotificationReader};
use crate::observability::messages::node::{PeerRegistered, PeerReplaced, PromptPublished};
use crate::observability::messages::StructuredLog;
use crate::registry::MethodRegistry;
use crate::traits::{Node, Peer};

/// Published when a followed upstream prompts this node.
///
/// `upstream_address` is the address recorded when the upstream was followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompted {
    pub upstream_name: String,
    pub upstream_address: String,
}

pub struct LocalNode {
    name: String,
    upstreams: PeerTable,
    downstreams: PeerTable,
    registry: MethodRegistry,
    log: LocalNotificationLog,
    prompts: broadcast::Sender<Prompted>,
}

impl LocalNode {
    pub fn new(name: impl Into<String>, registry: MethodRegistry, log: LocalNotificationLog) -> Self {
        let (prompts, _) = broadcast::channel(PROMPT_CHANNEL_CAPACITY);
        Self {
            name: name.into(),
            upstreams: PeerTable::new(),
            downstreams: PeerTable::new(),
            registry,
            log,
            prompts,
        }
    }

    /// Build a node named and sized from `cfg`.
    pub fn from_config(
        cfg: &Config,
        registry: MethodRegistry,
        reader: Arc<dyn NotificationReader>,
    ) -> Self {
        let log = LocalNotificationLog::with_section_size(
            reader,
            cfg.notifications.get_section_size(),
        );
        Self::new(cfg.node.get_name(), registry, log)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Followed upstreams, ordered by name.
    pub fn upstreams(&self) -> Vec<Peer> {
        self.upstreams.snapshot()
    }

    /// Led downstreams, ordered by name.
    pub fn downstreams(&self) -> Vec<Peer> {
        self.downstreams.snapshot()
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Receive every prompt published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Prompted> {
        self.prompts.subscribe()
    }

    fn record(table: &PeerTable, role: &str, peer: Peer) {
        let name = peer.name.clone();
        let address = peer.address.clone();
        match table.insert(peer) {
            Some(previous_address) if previous_address != address => PeerReplaced {
                role,
                name: &name,
                previous_address: &previous_address,
                address: &address,
            }
            .log(),
            Some(_) => {}
            None => PeerRegistered {
                role,
                name: &name,
                address: &address,
            }
            .log(),
        }
    }
}

impl std::fmt::Debug for LocalNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalNode")
            .field("name", &self.name)
            .field("upstreams", &self.upstreams)
            .field("downstreams", &self.downstreams)
            .field("registry", &self.registry)
            .finish()
    }
}

#[async_trait]
impl Node for LocalNode {
    async fn follow(&self, upstream: Peer) -> NodeResult<()> {
        Self::record(&self.upstreams, "upstream", upstream);
        Ok(())
    }

    async fn lead(&self, downstream: Peer) -> NodeResult<()> {
        Self::record(&self.downstreams, "downstream", downstream);
        Ok(())
    }

    async fn prompt(&self, upstream_name: &str) -> NodeResult<()> {
        let Some(upstream) = self.upstreams.get(upstream_name) else {
            return Err(NodeError::UnknownUpstream(upstream_name.to_string()));
        };

        // No subscribers is fine: nobody is pulling yet
        let subscriber_count = self
            .prompts
            .send(Prompted {
                upstream_name: upstream.name.clone(),
                upstream_address: upstream.address.clone(),
            })
            .unwrap_or(0);

        PromptPublished {
            upstream_name: &upstream.name,
            upstream_address: &upstream.address,
            subscriber_count,
        }
        .log();
        Ok(())
    }

    async fn notifications(&self, section_id: &str) -> NodeResult<String> {
        self.log.section_json(section_id).await
    }

    async fn call(&self, method_name: &str, args: &str, kwargs: &str) -> NodeResult<String> {
        self.registry.dispatch(method_name, args, kwargs).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ConfigFormat};
    use crate::notifications::{Notification, Section};
    use crate::registry::JsonMethod;
    use serde_json::json;

    struct CountingReader {
        count: u64,
    }

    #[async_trait]
    impl NotificationReader for CountingReader {
        async fn select_notifications(&self, start: u64, limit: u64) -> NodeResult<Vec<Notification>> {
            Ok((start..=self.count)
                .take(limit as usize)
                .map(|id| Notification {
                    id,
                    originator_id: "acc-1".to_string(),
                    originator_version: id,
                    topic: "bank:Transaction".to_string(),
                    state: format!("{{\"amount\":{}}}", id),
                })
                .collect())
        }
    }

    fn node() -> LocalNode {
        let registry = MethodRegistry::new().with(
            "get_balance",
            Arc::new(JsonMethod::new("get_balance", |_, _| Ok(json!("100.00")))),
        );
        let log = LocalNotificationLog::with_section_size(Arc::new(CountingReader { count: 3 }), 2);
        LocalNode::new("accounts", registry, log)
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(node().ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_follow_and_lead_record_peers() {
        let node = node();

        node.follow(Peer::new("orders", "orders:50051")).await.unwrap();
        node.lead(Peer::new("reporting", "reporting:50051")).await.unwrap();
        node.lead(Peer::new("audit", "audit:50051")).await.unwrap();

        assert_eq!(node.upstreams(), vec![Peer::new("orders", "orders:50051")]);
        assert_eq!(
            node.downstreams(),
            vec![
                Peer::new("audit", "audit:50051"),
                Peer::new("reporting", "reporting:50051")
            ]
        );
    }

    #[tokio::test]
    async fn test_refollow_replaces_address() {
        let node = node();

        node.follow(Peer::new("orders", "orders:1")).await.unwrap();
        node.follow(Peer::new("orders", "orders:2")).await.unwrap();

        assert_eq!(node.upstreams(), vec![Peer::new("orders", "orders:2")]);
    }

    #[tokio::test]
    async fn test_prompt_from_followed_upstream_is_published() {
        let node = node();
        let mut prompts = node.subscribe();

        node.follow(Peer::new("orders", "orders:50051")).await.unwrap();
        node.prompt("orders").await.unwrap();

        assert_eq!(
            prompts.recv().await.unwrap(),
            Prompted {
                upstream_name: "orders".to_string(),
                upstream_address: "orders:50051".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_prompt_carries_latest_followed_address() {
        let node = node();
        let mut prompts = node.subscribe();

        node.follow(Peer::new("orders", "orders:1")).await.unwrap();
        node.follow(Peer::new("orders", "orders:2")).await.unwrap();
        node.prompt("orders").await.unwrap();

        assert_eq!(prompts.recv().await.unwrap().upstream_address, "orders:2");
    }

    #[tokio::test]
    async fn test_empty_peer_name_is_recorded_like_any_other() {
        let node = node();
        let mut prompts = node.subscribe();

        assert_eq!(
            node.prompt("").await.unwrap_err(),
            NodeError::UnknownUpstream(String::new())
        );

        // Names are opaque: an empty one is still a name once followed
        node.follow(Peer::new("", "")).await.unwrap();
        assert_eq!(node.upstreams(), vec![Peer::new("", "")]);
        node.prompt("").await.unwrap();

        assert_eq!(
            prompts.recv().await.unwrap(),
            Prompted {
                upstream_name: String::new(),
                upstream_address: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn test_prompt_without_subscribers_succeeds() {
        let node = node();
        node.follow(Peer::new("orders", "orders:50051")).await.unwrap();

        assert!(node.prompt("orders").await.is_ok());
    }

    #[tokio::test]
    async fn test_prompt_from_unknown_upstream() {
        let node = node();
        let mut prompts = node.subscribe();

        // Leading a peer does not make it an upstream
        node.lead(Peer::new("orders", "orders:50051")).await.unwrap();

        let error = node.prompt("orders").await.unwrap_err();
        assert_eq!(error, NodeError::UnknownUpstream("orders".to_string()));
        assert!(prompts.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_notifications_are_paged() {
        let node = node();

        let first = Section::from_json(&node.notifications("1,10").await.unwrap()).unwrap();
        assert_eq!(first.id.as_deref(), Some("1,2"));
        assert_eq!(first.next_id.as_deref(), Some("3,4"));

        let second = Section::from_json(&node.notifications("3,4").await.unwrap()).unwrap();
        assert_eq!(second.id.as_deref(), Some("3,3"));
        assert_eq!(second.next_id, None);
        assert_eq!(second.items[0].state, "{\"amount\":3}");
    }

    #[tokio::test]
    async fn test_call_dispatches_through_registry() {
        let node = node();

        assert_eq!(node.call("get_balance", "[]", "{}").await.unwrap(), "\"100.00\"");
        assert_eq!(
            node.call("close_account", "[]", "{}").await.unwrap_err(),
            NodeError::UnknownMethod("close_account".to_string())
        );
    }

    #[test]
    fn test_from_config() {
        let cfg = parse_config(
            "node:\n  name: reporting\nnotifications:\n  section_size: 5\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        let node = LocalNode::from_config(
            &cfg,
            MethodRegistry::new(),
            Arc::new(CountingReader { count: 0 }),
        );

        assert_eq!(node.name(), "reporting");
        assert!(node.registry().is_empty());
        assert!(node.upstreams().is_empty());
    }
}
