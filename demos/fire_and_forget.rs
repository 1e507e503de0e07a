//! One-shot dispatch example
//!
//! Sends a request from a detached thread and waits for the printed outcome.
//!
//! Run with: cargo run --example fire_and_forget -- http://localhost:3000/

use fluent_http_client::{Executor, OneShotExecutor, ReqwestTransport, RuntimeExecutor, WebClient};
use std::sync::mpsc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn describe(executor: &dyn Executor) -> &'static str {
    if OneShotExecutor::is_a(executor) {
        "one-shot thread"
    } else {
        "managed pool"
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fluent_http_client=debug")),
        )
        .init();

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3000/".to_string());
    let client = WebClient::new(&target)?;
    let transport = ReqwestTransport::new()?;

    let executor = OneShotExecutor::instance();
    println!("Dispatching via {}", describe(executor));

    let (tx, rx) = mpsc::channel();
    executor.spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(e) => {
                let _ = tx.send(format!("no runtime: {}", e));
                return;
            }
        };
        let outcome = runtime.block_on(client.get(&transport));
        let _ = tx.send(match outcome {
            Ok(response) => format!("status {}", response.status),
            Err(e) => format!("error: {}", e),
        });
    });

    match rx.recv_timeout(Duration::from_secs(35)) {
        Ok(outcome) => println!("Outcome: {}", outcome),
        Err(_) => println!("No outcome reported"),
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let managed = RuntimeExecutor::new(runtime.handle().clone());
    println!("A RuntimeExecutor is a {}", describe(&managed));

    Ok(())
}
