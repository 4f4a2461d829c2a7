//! Terminal Loading-Message Animator Library
//!
//! This library provides the message rotation pool and the cancellable
//! animation scheduler behind the `loading_screen` binary: it cycles through
//! a configured set of loading messages, prints progress dots at an
//! irregular cadence, and stops cleanly on a one-shot signal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use loading_screen::animator::{Animator, stop_channel};
//! use loading_screen::config::MessageFile;
//! use loading_screen::error::AppError;
//! use loading_screen::pool::MessagePool;
//! use loading_screen::screen::TerminalScreen;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let file = MessageFile::load(None).await?;
//!     let set = file.resolve_set("default")?;
//!
//!     let pool = MessagePool::new(set.messages.clone())?;
//!     let mut animator = Animator::new(pool, TerminalScreen, std::io::stdout());
//!
//!     let (stop_tx, stop_rx) = stop_channel();
//!     let handle = tokio::spawn(async move { animator.run(stop_rx).await });
//!
//!     // ... wait for whatever should end the animation ...
//!     let _ = stop_tx.send(()).await;
//!     handle.await??;
//!
//!     Ok(())
//! }
//! ```

pub mod animator;
pub mod config;
pub mod constants;
pub mod error;
pub mod pool;
pub mod screen;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use animator::Animator;
pub use config::{LoadingMessage, MessageFile, MessageSet};
pub use error::AppError;
pub use pool::MessagePool;
pub use screen::{Screen, TerminalScreen};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
