//! Constants shared across the application.

/// Message set that is animated when no `--set` flag is given.
pub const DEFAULT_SET_NAME: &str = "default";

/// File name of the message configuration document.
pub const MESSAGES_FILE_NAME: &str = "messages.json";

/// Environment variable overriding the message file location.
pub const MESSAGES_FILE_ENV: &str = "LOADING_MESSAGES_FILE";

/// Animation cadence. The scheduler sleeps a uniform random interval of
/// `[MIN_TICK_MILLIS, MIN_TICK_MILLIS + TICK_RANGE_MILLIS)` between ticks;
/// the irregular timing is intentional, regular dots look mechanical.
pub const MIN_TICK_MILLIS: u64 = 100;

/// Width of the randomized tick range in milliseconds.
pub const TICK_RANGE_MILLIS: u64 = 500;
