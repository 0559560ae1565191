// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod client;        // channel setup for remote nodes
pub mod config;        // node/client config files
pub mod errors;        // error handling
pub mod node;          // bookkeeping node
pub mod notifications; // notification log sections
pub mod observability;
pub mod proto;         // wire contract and generated stubs
pub mod registry;      // application method dispatch
pub mod service;       // gRPC adapter for any Node
pub mod traits;        // Node and ApplicationMethod seams
