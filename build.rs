// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tonic_build::manual::{Builder, Method, Service};

/// One RPC of the `processor.Processor` service.
///
/// Message types are hand-declared in `src/proto/processor.rs` with their
/// wire tags, so only the service plumbing is generated here.
struct Rpc {
    name: &'static str,
    route_name: &'static str,
    input_type: &'static str,
    output_type: &'static str,
}

const RPCS: &[Rpc] = &[
    Rpc {
        name: "ping",
        route_name: "Ping",
        input_type: "crate::proto::Empty",
        output_type: "crate::proto::Empty",
    },
    Rpc {
        name: "follow",
        route_name: "Follow",
        input_type: "crate::proto::FollowRequest",
        output_type: "crate::proto::Empty",
    },
    Rpc {
        name: "lead",
        route_name: "Lead",
        input_type: "crate::proto::LeadRequest",
        output_type: "crate::proto::Empty",
    },
    Rpc {
        name: "prompt",
        route_name: "Prompt",
        input_type: "crate::proto::PromptRequest",
        output_type: "crate::proto::Empty",
    },
    Rpc {
        name: "get_notifications",
        route_name: "GetNotifications",
        input_type: "crate::proto::NotificationsRequest",
        output_type: "crate::proto::NotificationsReply",
    },
    Rpc {
        name: "call_application_method",
        route_name: "CallApplicationMethod",
        input_type: "crate::proto::CallRequest",
        output_type: "crate::proto::CallReply",
    },
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let service = RPCS
        .iter()
        .fold(
            Service::builder().name("Processor").package("processor"),
            |service, rpc| {
                service.method(
                    Method::builder()
                        .name(rpc.name)
                        .route_name(rpc.route_name)
                        .input_type(rpc.input_type)
                        .output_type(rpc.output_type)
                        .codec_path("tonic::codec::ProstCodec")
                        .build(),
                )
            },
        )
        .build();

    // Writes processor.Processor.rs into OUT_DIR
    Builder::new()
        .build_server(true)
        .build_client(true)
        .compile(&[service]);

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
