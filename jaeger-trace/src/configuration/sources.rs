// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::{collections::HashMap, fmt, str::FromStr};

use super::supported_configurations::SupportedConfigurations;

/// Where a configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSourceOrigin {
    Default,
    EnvVar,
    Code,
}

impl fmt::Display for ConfigSourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigSourceOrigin::Default => "default",
            ConfigSourceOrigin::EnvVar => "env_var",
            ConfigSourceOrigin::Code => "code",
        })
    }
}

/// A value a source held for a key, but which couldn't be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParseError {
    pub key: SupportedConfigurations,
    pub value: String,
    pub error: String,
    pub origin: ConfigSourceOrigin,
}

impl fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignoring {}={:?} from {}: {}",
            self.key.as_str(),
            self.value,
            self.origin,
            self.error
        )
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct ConfigKey<T> {
    pub(crate) value: T,
    pub(crate) origin: ConfigSourceOrigin,
}

#[derive(Debug, PartialEq)]
pub(crate) struct CompositeConfigSourceResult<T> {
    pub(crate) value: Option<ConfigKey<T>>,
    pub(crate) errors: Vec<ConfigParseError>,
}

impl<T> CompositeConfigSourceResult<T> {
    /// The resolved value, moving parse errors into `errors`
    pub(crate) fn into_value(self, errors: &mut Vec<ConfigParseError>) -> Option<T> {
        errors.extend(self.errors);
        self.value.map(|k| k.value)
    }
}

/// A source of raw configuration strings
pub(crate) trait ConfigurationSource {
    fn origin(&self) -> ConfigSourceOrigin;

    fn get(&self, key: SupportedConfigurations) -> Option<String>;
}

/// Sources ordered by precedence, the first one added wins
#[derive(Default)]
pub(crate) struct CompositeSource {
    sources: Vec<Box<dyn ConfigurationSource>>,
}

impl CompositeSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn default_sources() -> Self {
        let mut sources = Self::new();
        sources.add_source(EnvSource);
        sources
    }

    pub(crate) fn add_source<C: ConfigurationSource + 'static>(&mut self, source: C) {
        self.sources.push(Box::new(source));
    }

    pub(crate) fn get(&self, key: SupportedConfigurations) -> CompositeConfigSourceResult<String> {
        self.get_parse(key)
    }

    /// Returns the first value that parses as `T`.
    ///
    /// Values that fail to parse are skipped, and reported in `errors` along with their origin.
    pub(crate) fn get_parse<T>(&self, key: SupportedConfigurations) -> CompositeConfigSourceResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut errors = Vec::new();
        for source in &self.sources {
            let Some(raw) = source.get(key) else {
                continue;
            };
            match raw.trim().parse::<T>() {
                Ok(value) => {
                    return CompositeConfigSourceResult {
                        value: Some(ConfigKey {
                            value,
                            origin: source.origin(),
                        }),
                        errors,
                    }
                }
                Err(e) => errors.push(ConfigParseError {
                    key,
                    value: raw,
                    error: e.to_string(),
                    origin: source.origin(),
                }),
            }
        }
        CompositeConfigSourceResult {
            value: None,
            errors,
        }
    }
}

/// Reads the process environment
pub(crate) struct EnvSource;

impl ConfigurationSource for EnvSource {
    fn origin(&self) -> ConfigSourceOrigin {
        ConfigSourceOrigin::EnvVar
    }

    fn get(&self, key: SupportedConfigurations) -> Option<String> {
        std::env::var(key.as_str()).ok().filter(|v| !v.is_empty())
    }
}

/// A fixed set of values, used in tests in place of the environment
#[allow(unused)]
pub(crate) struct HashMapSource {
    map: HashMap<String, String>,
    origin: ConfigSourceOrigin,
}

#[allow(unused)]
impl HashMapSource {
    pub(crate) fn from_iter<K, V, I>(values: I, origin: ConfigSourceOrigin) -> Self
    where
        K: ToString,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        HashMapSource {
            map: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            origin,
        }
    }
}

impl ConfigurationSource for HashMapSource {
    fn origin(&self) -> ConfigSourceOrigin {
        self.origin
    }

    fn get(&self, key: SupportedConfigurations) -> Option<String> {
        self.map.get(key.as_str()).cloned()
    }
}
