//! A flexible and easy to use tool for renaming media files.
//!
//! The library reads layered YAML configuration files into named
//! [`Group`](config::Group)s and provides the filename helpers used while
//! renaming.

pub mod cli;
pub mod config;
mod constants;
pub mod errors;
pub mod logging;
pub mod names;
pub mod utils;

pub mod prelude {
    pub use crate::cli::{Options, get_options, parse_options_from};
    pub use crate::config::{Group, merge, read, validate};
    pub use crate::errors::{
        attribute_missing_error, config_parse_error, config_read_error, generic_error,
        invalid_group_error, invalid_source_error, invalid_value_error, path_not_absolute_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::names::{capitalize, clean_name};
    pub use crate::version;
}

/// Returns the version of the package as a string
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
