use std::ffi::OsString;
use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::constants::{
    CONFIG_HELP, LEVEL_HELP, LOG_FILE_HELP, QUIET_HELP, STD_OUT_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::{default_config_paths, default_log_file};

/// Options passed by the user on the command line
///
/// Built once at start-up and handed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Configuration files, in the order they should be merged
    pub configs: Vec<PathBuf>,
    /// File all log records are written to
    pub log_file: PathBuf,
    /// Whether log records are also printed to stdout
    pub use_stdout: bool,
    /// Verbosity of the logging
    pub level: LogLevel,
}

impl Options {
    /// Builds the options from parsed command-line arguments
    ///
    /// When no configuration file is given, the default locations are used.
    pub fn from_matches(matches: &ArgMatches) -> Options {
        let configs: Vec<PathBuf> = matches
            .get_many::<PathBuf>("config")
            .map(|values| values.cloned().collect())
            .unwrap_or_else(default_config_paths);

        let log_file = matches
            .get_one::<PathBuf>("log_file")
            .cloned()
            .unwrap_or_else(default_log_file);

        Options {
            configs,
            log_file,
            use_stdout: matches.get_flag("use_stdout"),
            level: get_verbosity(matches),
        }
    }
}

/// Creates the command-line parser
///
/// Defines the following arguments:
/// - `log_file`: The logfile to use
/// - `use_stdout`: Also log to stdout
/// - `verbose`: Increase verbosity level
/// - `quiet`: Decrease verbosity level
/// - `level`: Explicit verbosity level, overrides `verbose` and `quiet`
/// - `config`: Configuration files, may be repeated
pub fn build_command() -> Command {
    // Logging
    let arg_log_file = Arg::new("log_file")
        .short('f')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP)
        .value_parser(value_parser!(PathBuf));

    let arg_std_out = Arg::new("use_stdout")
        .short('o')
        .long("std-out")
        .help(STD_OUT_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .help(QUIET_HELP)
        .action(ArgAction::SetTrue);

    let arg_level = Arg::new("level")
        .short('l')
        .long("level")
        .value_name("LEVEL")
        .help(LEVEL_HELP)
        .value_parser(|s: &str| s.parse::<LogLevel>());

    // Config
    let arg_config = Arg::new("config")
        .short('C')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP)
        .action(ArgAction::Append)
        .value_parser(value_parser!(PathBuf));

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_log_file)
        .arg(arg_std_out)
        .arg(arg_verbose)
        .arg(arg_quiet)
        .arg(arg_level)
        .arg(arg_config)
}

/// Parses the arguments of the current process
pub fn get_options() -> Options {
    Options::from_matches(&build_command().get_matches())
}

/// Parses an explicit list of arguments, the first one being the binary name
///
/// # Errors
/// Returns an error if the arguments are not valid
pub fn parse_options_from<I, T>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command()
        .try_get_matches_from(args)
        .map_err(|e| generic_error(&e.to_string()))?;
    Ok(Options::from_matches(&matches))
}

/// Gets the verbosity level from the command-line arguments
///
/// An explicit `--level` wins over the `-v` and `-q` flags.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    match matches.get_one::<LogLevel>("level") {
        Some(level) => *level,
        None => LogLevel::from_flags(matches.get_count("verbose"), matches.get_flag("quiet")),
    }
}
