//! Configuration groups
//!
//! A group is a named, read-only view over one top-level entry of the merged
//! configuration.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::errors::{Result, attribute_missing_error, invalid_value_error};

/// Holds data for a configuration group
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    name: String,
    data: Mapping,
}

impl Group {
    pub fn new(name: impl Into<String>, data: Mapping) -> Group {
        Group {
            name: name.into(),
            data,
        }
    }

    /// The name of the group as written in the configuration file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing mapping of the group
    pub fn data(&self) -> &Mapping {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Iterates over the keys of the group that are strings
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().filter_map(Value::as_str)
    }

    /// Looks up a configuration value that is required to exist
    ///
    /// # Errors
    /// Returns `Error::AttributeMissing` naming the key and the group if the
    /// key is not defined.
    pub fn attr(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| attribute_missing_error(&self.name, key))
    }

    /// Looks up a value and converts it to `T`
    ///
    /// # Errors
    /// Returns `Error::AttributeMissing` if the key is not defined and
    /// `Error::InvalidValue` if the value cannot be converted.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.attr(key)?.clone();
        serde_yaml::from_value(value).map_err(|e| invalid_value_error(e, &self.name, key))
    }

    /// Populates a typed structure from the whole group
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(Value::Mapping(self.data.clone()))
            .map_err(|e| invalid_value_error(e, &self.name, "*"))
    }

    /// Returns the required keys the group does not define
    pub fn missing_keys<S: AsRef<str>>(&self, required: &[S]) -> Vec<String> {
        validate(required, &self.data)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Group {}>", self.name)
    }
}

/// Checks `data` against a list of required keys
///
/// Returns the names of the keys that are missing, in the order they were
/// required. An empty result means the data is valid. The loader never calls
/// this on its own.
pub fn validate<S: AsRef<str>>(required: &[S], data: &Mapping) -> Vec<String> {
    let mut missing = Vec::new();
    for key in required {
        let key: &str = key.as_ref();
        if !data.contains_key(key) {
            missing.push(key.to_string());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use serde::Deserialize;

    fn group(content: &str) -> Group {
        let data: Mapping = serde_yaml::from_str(content).unwrap();
        Group::new("tv", data)
    }

    #[test]
    fn test_attribute() {
        let group = group("input: /etc/\nlanguage: en");

        assert_eq!(group.attr("input").unwrap().as_str(), Some("/etc/"));
        assert_eq!(group.attr("language").unwrap().as_str(), Some("en"));
        assert_eq!(group.name(), "tv");
    }

    #[test]
    fn test_invalid_attribute() {
        let group = group("input: /etc/");

        for key in ["foo", "bar"] {
            match group.attr(key) {
                Err(Error::AttributeMissing { group, key: missing }) => {
                    assert_eq!(group, "tv");
                    assert_eq!(missing, key);
                }
                other => panic!("Expected AttributeMissing, got {other:?}"),
            }
        }
        assert!(group.get("foo").is_none());
    }

    #[test]
    fn test_representation() {
        assert_eq!(group("a: 1").to_string(), "<Group tv>");
    }

    #[test]
    fn test_keys_and_contains() {
        let group = group("a: 1\nb: 2");

        assert_eq!(group.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(group.contains("a"));
        assert!(!group.contains("c"));
    }

    #[test]
    fn test_get_as() {
        let group = group("season: 3\nextensions: [mkv, avi]");

        assert_eq!(group.get_as::<u32>("season").unwrap(), 3);
        assert_eq!(
            group.get_as::<Vec<String>>("extensions").unwrap(),
            vec!["mkv".to_string(), "avi".to_string()]
        );
        assert!(matches!(
            group.get_as::<u32>("extensions"),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            group.get_as::<u32>("episode"),
            Err(Error::AttributeMissing { .. })
        ));
    }

    #[test]
    fn test_deserialize_into() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Settings {
            input: String,
            #[serde(default)]
            recursive: bool,
        }

        let settings: Settings = group("input: /media\nrecursive: true")
            .deserialize_into()
            .unwrap();
        assert_eq!(
            settings,
            Settings {
                input: "/media".to_string(),
                recursive: true
            }
        );

        assert!(group("recursive: true").deserialize_into::<Settings>().is_err());
    }

    #[test]
    fn test_validate() {
        let data: Mapping = serde_yaml::from_str("input: /etc/\nlanguage: en").unwrap();

        assert!(validate(&["input", "language"], &data).is_empty());
        assert_eq!(
            validate(&["output", "input", "pattern"], &data),
            vec!["output".to_string(), "pattern".to_string()]
        );
        assert!(validate::<&str>(&[], &data).is_empty());
    }

    #[test]
    fn test_missing_keys() {
        let group = group("input: /etc/");

        assert_eq!(group.missing_keys(&["input", "output"]), vec!["output"]);
    }
}
