// src/main.rs
mod animator;
mod cli;
mod config;
mod constants;
mod error;
mod logging;
mod pool;
mod screen;

use animator::{Animator, stop_channel};
use clap::Parser;
use cli::Args;
use config::MessageFile;
use error::AppError;
use pool::MessagePool;
use screen::TerminalScreen;
use std::io::stdout;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load and validate the message file before anything animates, so
    // configuration problems are reported as plain startup errors.
    let message_file = MessageFile::load(args.messages.as_deref()).await?;

    if args.list_sets {
        print!("{}", message_file.summary());
        return Ok(());
    }

    let set = message_file.resolve_set(&args.set)?;
    info!(
        set = %set.name,
        messages = set.messages.len(),
        "resolved message set"
    );

    let pool = MessagePool::new(set.messages.clone())?;
    let mut animator = Animator::new(pool, TerminalScreen, stdout());

    let (stop_tx, stop_rx) = stop_channel();
    let mut animation = tokio::spawn(async move { animator.run(stop_rx).await });

    // One line on stdin (Enter is enough) ends the animation. The animator
    // itself only returns early on a fatal error (screen clear failing), so
    // that must terminate the process too instead of waiting for Enter on a
    // dead animation.
    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = &mut animation => {
            result??;
            Ok(())
        }
        read_result = reader.read_line(&mut line) => {
            // Signal the animator and wait for it on both read paths, so a
            // failed stdin read never leaves the task running into process
            // teardown.
            let _ = stop_tx.send(()).await;
            animation.await??;

            match read_result {
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!("stdin read failed: {e}");
                    Err(AppError::Io(e))
                }
            }
        }
    }
}
