//! Command-line argument parsing and processing.
//!
//! Supports the help, version and debug flags, single-shot and JSON output
//! modes, and an explicit configuration path. Unknown options are reported
//! and turn into a help-and-exit action.

use std::path::PathBuf;

use crate::logger::Log;

/// Options that shape a normal run.
#[derive(Debug, Default, PartialEq)]
pub struct RunOptions {
    pub debug_enabled: bool,
    /// Produce one frame and exit instead of running the timer loop.
    pub once: bool,
    /// Print frames as JSON instead of the decorated status block.
    pub json: bool,
    pub config_path: Option<PathBuf>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    Run(RunOptions),
    ShowHelp,
    ShowVersion,
    /// Show help due to unknown or malformed arguments and exit with failure
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments (including the program name) into an action.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = RunOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut error_found = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--once" | "-o" => options.once = true,
                "--json" | "-j" => options.json = true,
                "--config" | "-c" => {
                    if let Some(path) = args_vec.get(i + 1) {
                        options.config_path = Some(PathBuf::from(path));
                        i += 1;
                    } else {
                        Log::log_warning("Missing path for --config. Usage: --config <path>");
                        error_found = true;
                    }
                }
                _ => {
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        error_found = true;
                    }
                    // Non-option arguments are ignored
                }
            }
            i += 1;
        }

        let action = if display_help {
            CliAction::ShowHelp
        } else if error_found {
            CliAction::ShowHelpDueToError
        } else if display_version {
            CliAction::ShowVersion
        } else {
            CliAction::Run(options)
        };

        ParsedArgs { action }
    }

    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: sunarc [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-c, --config <path>  Use this configuration file");
    Log::log_indented("-d, --debug          Show detailed log lines");
    Log::log_indented("-h, --help           Print help information");
    Log::log_indented("-j, --json           Print frames as JSON");
    Log::log_indented("-o, --once           Render a single frame and exit");
    Log::log_indented("-V, --version        Print version information");
    Log::log_end();
}

pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}
