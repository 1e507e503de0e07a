//! Navigation walkthrough
//!
//! Builds a request step by step, undoes part of it and forks a second client.
//!
//! Run with: RUST_LOG=trace cargo run --example navigate

use fluent_http_client::WebClient;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Navigable Client Example");
    println!("========================\n");

    let mut client = WebClient::new("http://localhost:3000/api")?;
    println!("Base:    {}", client.base_uri());

    client
        .path("users")
        .path("42")
        .matrix("view", "full")
        .query("fields", "name")
        .header("Accept", "application/json");
    println!("Current: {}", client.current_uri());

    client.back(false);
    println!("Back:    {}", client.current_uri());

    let fork = WebClient::from_client(&client);
    println!("Fork base: {}", fork.base_uri());

    client.to("http://localhost:3000/api/health", true)?;
    println!("Forward: {}", client.current_uri());

    if let Err(e) = client.to("http://elsewhere", true) {
        println!("Rejected: {}", e);
    }

    client.to("http://elsewhere", false)?;
    println!("Rebased: {} (base {})", client.current_uri(), client.base_uri());

    Ok(())
}
