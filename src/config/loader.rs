//! Configuration loading functionality
//!
//! Reads any number of YAML configuration files, merges them in the order
//! given and turns the result into [`Group`]s.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, error, info};
use serde_yaml::{Mapping, Value};

use crate::config::group::Group;
use crate::config::merge::merge_mappings;
use crate::errors::{
    Error, Result, config_parse_error, config_read_error, invalid_group_error, invalid_source_error,
    path_not_absolute_error,
};

/// Name of the section groups can inherit values from
pub const DEFAULT_SECTION: &str = "default";

/// Key in a group enabling inheritance from the default section
pub const USE_DEFAULTS: &str = "use_defaults";

/// Conversion of one or several paths into an ordered list of sources
pub trait IntoSources {
    fn into_sources(self) -> Vec<PathBuf>;
}

impl IntoSources for &str {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoSources for String {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoSources for &String {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![PathBuf::from(self)]
    }
}

impl IntoSources for &Path {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![self.to_path_buf()]
    }
}

impl IntoSources for PathBuf {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![self]
    }
}

impl IntoSources for &PathBuf {
    fn into_sources(self) -> Vec<PathBuf> {
        vec![self.clone()]
    }
}

impl<P: AsRef<Path>> IntoSources for Vec<P> {
    fn into_sources(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

impl<P: AsRef<Path>> IntoSources for &Vec<P> {
    fn into_sources(self) -> Vec<PathBuf> {
        self.as_slice().into_sources()
    }
}

impl<P: AsRef<Path>> IntoSources for &[P] {
    fn into_sources(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

impl<P: AsRef<Path>, const N: usize> IntoSources for [P; N] {
    fn into_sources(self) -> Vec<PathBuf> {
        self.iter().map(|p| p.as_ref().to_path_buf()).collect()
    }
}

/// Reads one or several configuration files
///
/// Files are processed in the order provided and later values overwrite
/// earlier ones. Files that cannot be found are ignored, so a list of
/// default locations can be tried and the ones that do not exist are
/// skipped.
///
/// The `default` section is not returned as a group. Groups that set
/// `use_defaults` to a true value are merged with it, their own values taking
/// precedence.
///
/// # Errors
/// Returns an error if an existing file cannot be read or parsed, or if an
/// entry of the merged configuration is not a mapping. No groups are returned
/// in that case.
pub fn read(sources: impl IntoSources) -> Result<Vec<Group>> {
    let sources = sources.into_sources();
    debug!("Processing {} files", sources.len());

    let mut merged = Mapping::new();
    for source in sources {
        let path = resolve_path(&source);

        if path.is_file() {
            let data = read_source(&path)?;
            merged = merge_mappings(merged, data);
        } else {
            info!("{} not found. Was ignored.", path.display());
        }
    }

    build_groups(merged)
}

/// Reads a single YAML file and returns its top-level mapping
///
/// An empty file yields an empty mapping.
///
/// # Errors
/// Returns `Error::PathNotAbsolute` if `path` was not resolved first,
/// `Error::ConfigRead` if the file cannot be read, `Error::ConfigParse` if it
/// contains malformed YAML and `Error::InvalidSource` if the top level is not
/// a mapping.
pub fn read_source(path: &Path) -> Result<Mapping> {
    if !path.is_absolute() {
        return Err(path_not_absolute_error(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        error!("Unable to read {}", path.display());
        config_read_error(e, path.to_path_buf())
    })?;

    if content.trim().is_empty() {
        debug!("{} is empty", path.display());
        return Ok(Mapping::new());
    }

    let mut value: Value =
        serde_yaml::from_str(&content).map_err(|e| parse_failure(e, path))?;
    value.apply_merge().map_err(|e| parse_failure(e, path))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(invalid_source_error(
            path.to_path_buf(),
            "expected a mapping of groups at the top level",
        )),
    }
}

fn parse_failure(err: serde_yaml::Error, path: &Path) -> Error {
    match err.location() {
        Some(location) => error!(
            "Problem found in {} at ({} : {})",
            path.display(),
            location.line(),
            location.column()
        ),
        None => error!("Error found while parsing {}", path.display()),
    }
    config_parse_error(err, path.to_path_buf())
}

/// Expands `~` and environment variables, then makes the path absolute
///
/// Relative paths are resolved against the current working directory and
/// `.`/`..` components are removed without touching the filesystem.
pub fn resolve_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let expanded = PathBuf::from(expand_path(&raw));

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let joined = match env::current_dir() {
            Ok(cwd) => cwd.join(&expanded),
            Err(e) => {
                debug!("Unable to determine the working directory: {e}");
                expanded.clone()
            }
        };
        debug!("Making {} absolute => {}", raw, joined.display());
        joined
    };

    normalize_path(&absolute)
}

/// Expands `~` and environment variables in a path
///
/// Falls back to expanding only `~` when a variable is not set.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|expanded| expanded.to_string())
        .unwrap_or_else(|_| shellexpand::tilde(path).to_string())
}

/// Lexically removes `.` and `..` components from a path
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn build_groups(merged: Mapping) -> Result<Vec<Group>> {
    let mut defaults = Mapping::new();
    let mut entries = Vec::with_capacity(merged.len());
    for (key, value) in merged {
        match key {
            Value::String(name) if name == DEFAULT_SECTION => {
                defaults = group_data(DEFAULT_SECTION, value)?;
            }
            Value::String(name) => entries.push((name, value)),
            other => {
                return Err(invalid_group_error(
                    &format!("{other:?}"),
                    "group names must be strings",
                ));
            }
        }
    }

    let mut groups = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let data = group_data(&name, value)?;
        let data = if data.get(USE_DEFAULTS).is_some_and(is_truthy) {
            debug!("Merging group {name} with the default section");
            merge_mappings(defaults.clone(), data)
        } else {
            data
        };

        groups.push(Group::new(name, data));
    }

    info!("Configuration loaded with {} groups", groups.len());
    Ok(groups)
}

fn group_data(name: &str, value: Value) -> Result<Mapping> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(invalid_group_error(name, "expected a mapping")),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(s) => !s.is_empty(),
        Value::Mapping(m) => !m.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}
