//! OS signals: SIGINT/SIGTERM (Ctrl+C on Windows) quit the shell

use tokio::sync::mpsc;
use vanguard_core::prelude::*;

use crate::message::Message;

/// Spawn a task that turns the first termination signal into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let quit = async {
            let signal = termination_signal().await?;
            info!("Received {}, quitting", signal);
            tx.send(Message::Quit)
                .await
                .map_err(|e| Error::channel_send(e.to_string()))
        };
        if let Err(e) = quit.await {
            error!("Signal handler stopped: {}", e);
        }
    });
}

#[cfg(unix)]
async fn termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    })
}

#[cfg(windows)]
async fn termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
