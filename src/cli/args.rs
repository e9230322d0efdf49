//! Command-line argument parsing.
//!
//! `--id <session>` is the shared-link entry point: it pre-fills the id
//! field, loads immediately without persisting, and hides the toolbar so the
//! viewer is effectively read-only.

/// Options for launching the viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    /// Session to auto-load in read-only shared-link mode
    pub session_id: Option<String>,
    /// Server address override, host[:port]
    pub host: Option<String>,
    /// Connect with TLS (`wss://`)
    pub secure: bool,
    /// Synthesize one panel per value instead of the fixed panel table when
    /// the server sends no groups
    pub per_value_groups: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the viewer (default)
    Run(LaunchOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use traceview::cli::{parse_args, CliCommand};
///
/// let args = vec!["traceview".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = LaunchOptions::default();
    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--id" => options.session_id = args.next(),
            "--host" => options.host = args.next(),
            "--secure" => options.secure = true,
            "--per-value-groups" => options.per_value_groups = true,
            _ => {}
        }
    }
    CliCommand::Run(options)
}
