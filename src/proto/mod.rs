// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Message declarations for the processor package
mod processor;

// Client and server stubs generated by build.rs
#[allow(clippy::all)]
mod service {
    include!(concat!(env!("OUT_DIR"), "/processor.Processor.rs"));
}

pub use processor::*;
pub use service::{processor_client, processor_server};

/// Fully-qualified gRPC service name, as routed on the wire.
pub const SERVICE_NAME: &str = "processor.Processor";
