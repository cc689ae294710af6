use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the configuration layer of unameit
#[derive(Debug)]
pub enum Error {
    /// A configuration source exists but could not be read
    ConfigRead { source: io::Error, path: PathBuf },
    /// A configuration source contains malformed YAML
    ConfigParse {
        source: serde_yaml::Error,
        path: PathBuf,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// A configuration source does not hold a mapping at the top level
    InvalidSource { path: PathBuf, detail: String },
    /// A top-level entry cannot be turned into a group
    InvalidGroup { name: String, detail: String },
    /// A group was asked for a key it does not define
    AttributeMissing { group: String, key: String },
    /// A group value could not be converted to the requested type
    InvalidValue {
        group: String,
        key: String,
        source: serde_yaml::Error,
    },
    /// A single source was read without resolving its path first
    PathNotAbsolute { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigRead { path, .. } => {
                write!(f, "Unable to read {}", path.display())
            }
            Error::ConfigParse {
                path,
                line: Some(line),
                column: Some(column),
                ..
            } => {
                write!(
                    f,
                    "Error parsing {} at ({line} : {column})",
                    path.display()
                )
            }
            Error::ConfigParse { path, .. } => {
                write!(f, "Error parsing {}", path.display())
            }
            Error::InvalidSource { path, detail } => {
                write!(f, "Invalid configuration in {}: {detail}", path.display())
            }
            Error::InvalidGroup { name, detail } => {
                write!(f, "Invalid configuration group '{name}': {detail}")
            }
            Error::AttributeMissing { group, key } => {
                write!(f, "Group {group} has no attribute {key}")
            }
            Error::InvalidValue { group, key, source } => {
                write!(f, "Invalid value for {key} in group {group}: {source}")
            }
            Error::PathNotAbsolute { path } => {
                write!(f, "Path should be absolute: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::ConfigRead { source, .. } => Some(source),
            Error::ConfigParse { source, .. } => Some(source),
            Error::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for unameit
///
/// # Examples
/// ```
/// use unameit::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a read error
pub fn config_read_error(err: io::Error, path: PathBuf) -> Error {
    Error::ConfigRead { source: err, path }
}

/// Helper function to create a parse error, keeping the position when the
/// YAML parser reports one
pub fn config_parse_error(err: serde_yaml::Error, path: PathBuf) -> Error {
    let location = err.location();
    Error::ConfigParse {
        line: location.as_ref().map(|l| l.line()),
        column: location.as_ref().map(|l| l.column()),
        source: err,
        path,
    }
}

/// Helper function to create an invalid source error
pub fn invalid_source_error(path: PathBuf, detail: &str) -> Error {
    Error::InvalidSource {
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid group error
pub fn invalid_group_error(name: &str, detail: &str) -> Error {
    Error::InvalidGroup {
        name: name.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create an attribute missing error
pub fn attribute_missing_error(group: &str, key: &str) -> Error {
    Error::AttributeMissing {
        group: group.to_string(),
        key: key.to_string(),
    }
}

/// Helper function to create an invalid value error
pub fn invalid_value_error(err: serde_yaml::Error, group: &str, key: &str) -> Error {
    Error::InvalidValue {
        group: group.to_string(),
        key: key.to_string(),
        source: err,
    }
}

/// Helper function to create a path not absolute error
pub fn path_not_absolute_error(path: PathBuf) -> Error {
    Error::PathNotAbsolute { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml_error(content: &str) -> serde_yaml::Error {
        serde_yaml::from_str::<serde_yaml::Value>(content)
            .err()
            .unwrap()
    }

    #[test]
    fn test_config_read_error() {
        let path = PathBuf::from("/test/path.cfg");
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error = config_read_error(io_error, path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/path.cfg"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some(), "Read error should keep its source");
    }

    #[test]
    fn test_config_parse_error_with_location() {
        let error = config_parse_error(yaml_error("a: [1, 2\nb: 3"), PathBuf::from("/bad.cfg"));

        match &error {
            Error::ConfigParse { line, column, .. } => {
                assert!(line.is_some(), "Parse error should carry a line");
                assert!(column.is_some(), "Parse error should carry a column");
            }
            other => panic!("Unexpected error: {other:?}"),
        }

        let error_string = format!("{error}");
        assert!(error_string.starts_with("Error parsing /bad.cfg at ("));
    }

    #[test]
    fn test_invalid_source_error() {
        let error = invalid_source_error(PathBuf::from("/x.cfg"), "expected a mapping");

        let error_string = format!("{error}");
        assert!(error_string.contains("/x.cfg"));
        assert!(error_string.contains("expected a mapping"));
    }

    #[test]
    fn test_invalid_group_error() {
        let error = invalid_group_error("tv", "expected a mapping");

        let error_string = format!("{error}");
        assert!(error_string.contains("'tv'"));
        assert!(error_string.contains("expected a mapping"));
    }

    #[test]
    fn test_attribute_missing_error() {
        let error = attribute_missing_error("tv", "language");

        assert_eq!(format!("{error}"), "Group tv has no attribute language");
    }

    #[test]
    fn test_invalid_value_error() {
        let error = invalid_value_error(yaml_error("[1"), "tv", "season");

        let error_string = format!("{error}");
        assert!(error_string.contains("season"));
        assert!(error_string.contains("tv"));
    }

    #[test]
    fn test_path_not_absolute_error() {
        let error = path_not_absolute_error(PathBuf::from("first_conf.cfg"));

        assert_eq!(
            format!("{error}"),
            "Path should be absolute: first_conf.cfg"
        );
    }

    #[test]
    fn test_generic_error() {
        let error = generic_error("Something went wrong");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Something went wrong"),
            "Error message should contain the message"
        );
    }
}
