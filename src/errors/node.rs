// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Domain errors of a processor node and their transport status codes.
//!
//! The wire contract carries no error messages, so every failure surfaces to
//! the caller as a gRPC status. `NodeError` is the only place that mapping
//! lives.

use thiserror::Error;
use tonic::{Code, Status};

use super::SectionIdError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// No application method is registered under this name.
    #[error("Unknown application method '{0}'")]
    UnknownMethod(String),

    /// A prompt named an upstream this node does not follow.
    #[error("Unknown upstream '{0}'")]
    UnknownUpstream(String),

    /// The requested section id could not be interpreted.
    #[error(transparent)]
    InvalidSectionId(#[from] SectionIdError),

    /// An application method rejected its opaque argument payloads.
    #[error("Invalid arguments for '{method_name}': {reason}")]
    InvalidArguments { method_name: String, reason: String },

    /// An application method ran and failed.
    #[error("Application method '{method_name}' failed: {reason}")]
    MethodFailed { method_name: String, reason: String },

    /// A reply payload could not be serialized.
    #[error("Failed to encode reply: {0}")]
    Encoding(String),

    /// A backing resource (notification reader, peer) is unavailable.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for node operations.
pub type NodeResult<T> = Result<T, NodeError>;

impl NodeError {
    /// The gRPC status code this error travels as.
    pub fn code(&self) -> Code {
        match self {
            NodeError::UnknownMethod(_) | NodeError::UnknownUpstream(_) => Code::NotFound,
            NodeError::InvalidSectionId(_) | NodeError::InvalidArguments { .. } => {
                Code::InvalidArgument
            }
            NodeError::MethodFailed { .. } | NodeError::Encoding(_) => Code::Internal,
            NodeError::Unavailable(_) => Code::Unavailable,
        }
    }
}

impl From<NodeError> for Status {
    fn from(error: NodeError) -> Self {
        Status::new(error.code(), error.to_string())
    }
}

impl From<serde_json::Error> for NodeError {
    fn from(error: serde_json::Error) -> Self {
        NodeError::Encoding(error.to_string())
    }
}
