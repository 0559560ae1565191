use async_trait::async_trait;

use crate::errors::NodeResult;

/// A host application operation reachable through `CallApplicationMethod`.
///
/// `args` and `kwargs` arrive exactly as the caller sent them and the returned
/// string goes back as `CallReply.data`. How they are serialized is agreed
/// between caller and application.
#[async_trait]
pub trait ApplicationMethod: Send + Sync {
    async fn invoke(&self, args: &str, kwargs: &str) -> NodeResult<String>;
}
