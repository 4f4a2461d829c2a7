//! The animation scheduler.
//!
//! Runs as a single background task: prints the current loading message,
//! appends progress dots at an irregular cadence until the message's
//! randomized duration elapses, then draws the next message from the pool.
//! The screen is cleared at startup, at every cycle boundary, and once more
//! on shutdown. A one-shot stop signal from the controlling task ends the
//! loop; the signal is polled between ticks, so cancellation latency is
//! bounded by one sleep interval.

use crate::config::LoadingMessage;
use crate::constants::{MIN_TICK_MILLIS, TICK_RANGE_MILLIS};
use crate::error::AppError;
use crate::pool::MessagePool;
use crate::screen::Screen;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::Instant;
use tracing::{debug, info};

/// Creates the one-shot stop channel connecting the controlling task to the
/// animator. Capacity 1 is enough: the signal is sent at most once.
pub fn stop_channel() -> (mpsc::Sender<()>, mpsc::Receiver<()>) {
    mpsc::channel(1)
}

pub struct Animator<S: Screen, W: Write> {
    pool: MessagePool,
    screen: S,
    out: W,
    rng: SmallRng,
}

impl<S: Screen, W: Write> Animator<S, W> {
    pub fn new(pool: MessagePool, screen: S, out: W) -> Self {
        Self::with_rng(pool, screen, out, SmallRng::from_os_rng())
    }

    /// Like [`Animator::new`] but with an explicit generator for the timing
    /// samples, so tests can seed it.
    pub fn with_rng(pool: MessagePool, screen: S, out: W, rng: SmallRng) -> Self {
        Self {
            pool,
            screen,
            out,
            rng,
        }
    }

    /// Runs the animation until a stop is signaled.
    ///
    /// A dropped sender counts as a stop as well, so the task can never be
    /// orphaned when the controlling side bails out early.
    pub async fn run(&mut self, mut stop: mpsc::Receiver<()>) -> Result<(), AppError> {
        self.screen.clear()?;
        info!("animation started with {} messages", self.pool.len());

        let mut message_complete = true;
        let mut deadline = Instant::now();

        loop {
            if message_complete {
                if self.pool.cycle_start() {
                    self.screen.clear()?;
                }

                let message = self.pool.draw();
                write!(self.out, "{}", message.text)?;
                self.out.flush()?;

                let duration = self.sample_duration(&message);
                debug!(text = %message.text, seconds = duration.as_secs(), "presenting message");
                deadline = Instant::now() + duration;
                message_complete = false;
                continue;
            }

            write!(self.out, ".")?;
            self.out.flush()?;

            if Instant::now() >= deadline {
                writeln!(self.out)?;
                self.out.flush()?;
                message_complete = true;
            }

            tokio::time::sleep(self.sample_tick()).await;

            match stop.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => {
                    self.screen.clear()?;
                    info!("animation stopped");
                    return Ok(());
                }
                Err(TryRecvError::Empty) => {}
            }
        }
    }

    /// Samples how long a message stays on screen: `min_seconds` plus a
    /// uniform offset in `[0, max_seconds)`. Validation guarantees
    /// `max_seconds >= 1`, so the configured minimum is always reachable and
    /// `min + max` never is.
    fn sample_duration(&mut self, message: &LoadingMessage) -> Duration {
        let offset = if message.max_seconds == 0 {
            0
        } else {
            self.rng.random_range(0..message.max_seconds)
        };
        Duration::from_secs(message.min_seconds + offset)
    }

    /// Samples the sleep before the next tick, uniform in `[100, 600)` ms.
    fn sample_tick(&mut self) -> Duration {
        Duration::from_millis(MIN_TICK_MILLIS + self.rng.random_range(0..TICK_RANGE_MILLIS))
    }
}
