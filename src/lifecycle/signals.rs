//! OS signal handling.
//!
//! # Responsibilities
//! - Register handlers for the two standard termination signals
//! - Log which signal arrived, then exit the process immediately
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - No graceful drain: in-flight requests are cut off with the process
//! - Exit code 0; a termination signal is normal shutdown for this service

/// Spawn the task that waits for a termination signal and exits the process.
pub fn install() {
    tokio::spawn(async {
        let signal = wait_for_termination().await;
        tracing::info!(signal, "Received termination signal, stopping");
        std::process::exit(0);
    });
}

#[cfg(unix)]
async fn wait_for_termination() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt =
        signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut terminate =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() -> &'static str {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    "ctrl-c"
}
