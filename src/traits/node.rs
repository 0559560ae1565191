use async_trait::async_trait;

use crate::errors::NodeResult;

/// A named peer in the propagation topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    pub name: String,
    pub address: String,
}

impl Peer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// The six Processor operations in domain terms.
///
/// `ProcessorService` adapts any `Node` to the gRPC contract, so an
/// implementation never sees transport types. Errors become status codes via
/// [`crate::errors::NodeError::code`].
#[async_trait]
pub trait Node: Send + Sync {
    /// Liveness check. Must not have side effects.
    async fn ping(&self) -> NodeResult<()> {
        Ok(())
    }

    /// Treat `upstream` as a source of events.
    async fn follow(&self, upstream: Peer) -> NodeResult<()>;

    /// Treat `downstream` as a consumer of this node's events.
    async fn lead(&self, downstream: Peer) -> NodeResult<()>;

    /// The named upstream has new notifications for this node.
    async fn prompt(&self, upstream_name: &str) -> NodeResult<()>;

    /// Serialized section of the notification log addressed by `section_id`.
    async fn notifications(&self, section_id: &str) -> NodeResult<String>;

    /// Invoke an application method with opaque argument payloads.
    async fn call(&self, method_name: &str, args: &str, kwargs: &str) -> NodeResult<String>;
}
