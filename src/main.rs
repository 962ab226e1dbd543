use clap::Parser;
use log::warn;
use solace_consumer::cli::{Cli, LogLevel};
use solace_consumer::client::Client;
use solace_consumer::config::{ConsumerConfig, SubscriptionMode};
use solace_consumer::handler::MessageCounter;
use solace_consumer::receiver::Receiver;
use std::env;
use std::sync::Arc;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level: &str = match cli.log_level {
        Some(LogLevel::Trace) => "trace",
        Some(LogLevel::Warn) => "warn",
        Some(LogLevel::Info) => "info",
        Some(LogLevel::Error) => "error",
        Some(LogLevel::Debug) => "debug",
        None => "info",
    };
    env::set_var("RUST_LOG", log_level);
    env_logger::init();

    // setup failures are fatal; steady-state and teardown failures are not.
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConsumerConfig::from_env(&cli)?;
    banner(&config);

    let mut client = Client::new(&config)?;
    client.connect(&config.connect_info()).await?;
    println!("Connected to {}", config.host);

    let mut receiver = Receiver::new(client, &config);
    receiver.start().await?;
    match config.mode {
        SubscriptionMode::Topic => println!("Subscribed to topic: {}", config.topic),
        SubscriptionMode::Queue => println!(
            "Bound to {} queue: {}",
            config.queue_access, config.queue
        ),
    }

    let handler = Arc::new(MessageCounter::from_config(&config));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let loop_handler = handler.clone();
    let receive_loop = tokio::spawn(async move {
        receiver.run(&loop_handler, shutdown_rx).await;
        receiver
    });

    println!("Waiting for messages... (Press Ctrl+C to exit)");
    tokio::signal::ctrl_c().await?;
    println!("\nShutting down...");

    if shutdown_tx.send(true).is_err() {
        warn!("receive loop already finished");
    }
    let mut receiver = receive_loop.await?;
    receiver.terminate().await;
    receiver.into_client().disconnect().await;

    println!("Total messages received: {}", handler.count());
    Ok(())
}

fn banner(config: &ConsumerConfig) {
    let separator = "=".repeat(60);
    println!("Solace Message Consumer");
    println!("{separator}");
    println!("Connecting to: {}", config.host);
    println!("VPN: {}", config.vpn);
    println!("Username: {}", config.username);
    match config.mode {
        SubscriptionMode::Topic => println!("Topic: {}", config.topic),
        SubscriptionMode::Queue => {
            println!("Queue: {}", config.queue);
            println!("Queue type: {}", config.queue_access);
            println!("Acknowledge: {}", config.acknowledge);
        }
    }
    println!("{separator}");
}
