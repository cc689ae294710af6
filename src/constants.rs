/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "net";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "bjornlarsson";

/// Application name used for identification
///
/// Also names the default log file and the configuration folder.
pub const APPLICATION: &str = "unameit";

/// Name of the configuration file looked up in the platform configuration folder
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Date format of the timestamps written to the log file
pub const LOG_DATE_FORMAT: &str = "%m-%d %H:%M:%S";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "The logfile to use";

/// Help text for the stdout logging command-line option
pub const STD_OUT_HELP: &str = "If set, also log to stdout.";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Print extra information. Useful for debugging.";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Print less information";

/// Help text for the level command-line option
pub const LEVEL_HELP: &str = "Set the log level (error, warning, info, debug or trace)";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Add a config file to use. Can be specified multiple times to add \
                               more files. Can be an absolute or relative path.";
