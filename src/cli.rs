use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines whether log output may go to stdout.
/// During an animation stdout belongs to the animator, so logs go to the
/// file only; listing sets and debug mode are safe to log to the console.
pub fn logs_to_stdout(args: &Args) -> bool {
    args.list_sets || args.debug
}

/// Terminal loading-message animator
///
/// Cycles through a configured set of loading messages, appending progress
/// dots until each message's randomized duration elapses, then moves on to
/// the next one. No message repeats until the whole set has been shown.
///
/// Press Enter to stop the animation and exit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Message set to animate, by name.
    #[arg(short = 's', long = "set", default_value = crate::constants::DEFAULT_SET_NAME)]
    pub set: String,

    /// Path to the message file. If not provided, the file is looked up via
    /// the LOADING_MESSAGES_FILE environment variable, the platform config
    /// directory, and finally the working directory.
    #[arg(short = 'm', long = "messages", help_heading = "Configuration")]
    pub messages: Option<String>,

    /// List the available message sets and exit.
    #[arg(short = 'l', long = "list-sets", help_heading = "Configuration")]
    pub list_sets: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Enable debug mode, which additionally writes log output to stdout.
    /// Expect the extra lines to interleave with the animation.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}
