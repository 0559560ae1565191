// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::{bail, Context};
use processor_rpc::client::connect;
use processor_rpc::config::load_and_validate_config;
use processor_rpc::notifications::Section;
use processor_rpc::proto::{
    CallRequest, Empty, FollowRequest, LeadRequest, NotificationsRequest, PromptRequest,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: processor-rpc <config.yaml> <command> [args...]

Commands:
  ping
  follow <upstream_name> <upstream_address>
  lead <downstream_name> <downstream_address>
  prompt <upstream_name>
  notifications <section_id>
  call <method_name> [args] [kwargs]";

/// One Processor call, parsed from the command line
#[derive(Debug, PartialEq)]
enum Command {
    Ping,
    Follow(FollowRequest),
    Lead(LeadRequest),
    Prompt(PromptRequest),
    Notifications(NotificationsRequest),
    Call(CallRequest),
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            bail!("missing command\n\n{}", USAGE);
        };
        let arg = |i: usize| rest.get(i).cloned().unwrap_or_default();

        let command = match (name.as_str(), rest.len()) {
            ("ping", 0) => Command::Ping,
            ("follow", 2) => Command::Follow(FollowRequest {
                upstream_name: arg(0),
                upstream_address: arg(1),
            }),
            ("lead", 2) => Command::Lead(LeadRequest {
                downstream_name: arg(0),
                downstream_address: arg(1),
            }),
            ("prompt", 1) => Command::Prompt(PromptRequest {
                upstream_name: arg(0),
            }),
            ("notifications", 1) => Command::Notifications(NotificationsRequest {
                section_id: arg(0),
            }),
            ("call", 1..=3) => Command::Call(CallRequest {
                method_name: arg(0),
                args: arg(1),
                kwargs: arg(2),
            }),
            _ => bail!("unrecognised command '{}'\n\n{}", args.join(" "), USAGE),
        };
        Ok(command)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    let command = Command::parse(&args[2..])?;

    let mut client = connect(&config.client)
        .await
        .with_context(|| format!("connecting to {}", config.client.get_endpoint()))?;

    let start_time = Instant::now();
    match command {
        Command::Ping => {
            client.ping(Empty {}).await?;
            println!("pong from {} in {:?}", config.client.get_endpoint(), start_time.elapsed());
        }
        Command::Follow(request) => {
            client.follow(request).await?;
            println!("ok");
        }
        Command::Lead(request) => {
            client.lead(request).await?;
            println!("ok");
        }
        Command::Prompt(request) => {
            client.prompt(request).await?;
            println!("ok");
        }
        Command::Notifications(request) => {
            let reply = client.get_notifications(request).await?.into_inner();
            // Sections from other implementations may not be JSON; show them raw
            match Section::from_json(&reply.section) {
                Ok(section) => {
                    println!("section: {}", section.id.as_deref().unwrap_or("(empty)"));
                    for item in &section.items {
                        println!(
                            "  {} {} v{} {}",
                            item.id, item.originator_id, item.originator_version, item.topic
                        );
                    }
                    println!("next: {}", section.next_id.as_deref().unwrap_or("(none)"));
                }
                Err(_) => println!("{}", reply.section),
            }
        }
        Command::Call(request) => {
            let reply = client.call_application_method(request).await?.into_inner();
            println!("{}", reply.data);
        }
    }

    Ok(())
}
