//! Demonstration program: sends a fixed three-turn conversation and prints
//! the text of the reply.
//!
//! Usage:
//!   ANTHROPIC_API_KEY=sk-ant-... cargo run --bin claude-demo
//!
//! Set `RUST_LOG=claude_messages=debug` for transport metadata.

use anyhow::Context;
use claude_messages::{ClientConfig, Credential, Message, MessageRequest, TracingInterceptor};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(text) => println!("Response: {text}"),
        Err(e) => {
            tracing::error!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<String> {
    let credential = Credential::from_env().context("Error creating client")?;
    let config = ClientConfig::from_env().context("Error creating client")?;

    let client = claude_messages::Client::builder()
        .interceptor(TracingInterceptor::new().redact(credential.expose()))
        .credential(credential)
        .config(config)
        .build_blocking()
        .context("Error creating client")?;

    let request = MessageRequest::new(
        "claude-1.3",
        vec![
            Message::user("Hello there."),
            Message::assistant("Hi, I'm Claude. How can I help you?"),
            Message::user("Can you explain LLMs in plain English?"),
        ],
        100,
    )
    .temperature(0.7);

    let response = client.send(&request).context("Error sending message")?;

    Ok(response.text())
}
