// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types of the `processor` package.
//!
//! Laid out the way prost-build would emit them for `proto/processor.proto`.
//! Tags are part of the wire contract and must not be renumbered.
//!
//! Nothing regenerates these from the `.proto` file. `tests/contract.rs`
//! parses the IDL and fails if a field, tag or RPC here drifts from it, so
//! edit both together.

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

/// Declared by the contract but not referenced by any RPC.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InitRequest {
    #[prost(string, tag = "1")]
    pub application_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FollowRequest {
    #[prost(string, tag = "1")]
    pub upstream_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub upstream_address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LeadRequest {
    #[prost(string, tag = "1")]
    pub downstream_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub downstream_address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromptRequest {
    #[prost(string, tag = "1")]
    pub upstream_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationsRequest {
    #[prost(string, tag = "1")]
    pub section_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotificationsReply {
    #[prost(string, tag = "1")]
    pub section: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CallRequest {
    #[prost(string, tag = "1")]
    pub method_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub args: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub kwargs: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CallReply {
    #[prost(string, tag = "1")]
    pub data: ::prost::alloc::string::String,
}
