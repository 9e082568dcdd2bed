// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{ratio, sampler_type};
use crate::sampler::JaegerSampler;

/// The sampling strategy, as named in configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplerType {
    #[default]
    #[serde(rename = "const")]
    Const,
    #[serde(rename = "probabilistic")]
    Probabilistic,
    #[serde(rename = "ratelimiting")]
    RateLimiting,
}

impl SamplerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplerType::Const => sampler_type::CONST,
            SamplerType::Probabilistic => sampler_type::PROBABILISTIC,
            SamplerType::RateLimiting => sampler_type::RATE_LIMITING,
        }
    }
}

impl FromStr for SamplerType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(sampler_type::CONST) {
            Ok(SamplerType::Const)
        } else if s.eq_ignore_ascii_case(sampler_type::PROBABILISTIC) {
            Ok(SamplerType::Probabilistic)
        } else if s.eq_ignore_ascii_case(sampler_type::RATE_LIMITING) {
            Ok(SamplerType::RateLimiting)
        } else {
            Err("sampler type should be one of const, probabilistic, ratelimiting")
        }
    }
}

impl fmt::Display for SamplerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected sampler configuration
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SamplerConfigError {
    #[error("sampler param must be a finite number, got {0}")]
    NonFiniteParam(f64),
    #[error("ratelimiting sampler param must not be negative, got {0}")]
    NegativeRate(f64),
    #[error("probabilistic sampler param must be between 0.0 and 1.0, got {0}")]
    RatioOutOfRange(f64),
}

/// Configuration for the sampler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Which sampling strategy to use
    #[serde(rename = "type", default)]
    pub sampler_type: SamplerType,

    /// Meaning depends on the type:
    /// * `const`: 0 drops everything, anything else samples everything
    /// * `probabilistic`: ratio of traces to sample, within 0.0-1.0
    /// * `ratelimiting`: maximum number of spans sampled per second
    #[serde(default = "default_param")]
    pub param: f64,
}

fn default_param() -> f64 {
    1.0
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            sampler_type: SamplerType::default(),
            param: default_param(),
        }
    }
}

impl SamplerConfig {
    pub fn new(sampler_type: SamplerType, param: f64) -> Self {
        SamplerConfig {
            sampler_type,
            param,
        }
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Checks the parameter against the sampler type
    pub fn validate(&self) -> Result<(), SamplerConfigError> {
        if !self.param.is_finite() {
            return Err(SamplerConfigError::NonFiniteParam(self.param));
        }
        match self.sampler_type {
            SamplerType::Const => Ok(()),
            SamplerType::Probabilistic
                if !(ratio::MIN_SAMPLE_RATE..=ratio::MAX_SAMPLE_RATE).contains(&self.param) =>
            {
                Err(SamplerConfigError::RatioOutOfRange(self.param))
            }
            SamplerType::Probabilistic => Ok(()),
            SamplerType::RateLimiting if self.param < 0.0 => {
                Err(SamplerConfigError::NegativeRate(self.param))
            }
            SamplerType::RateLimiting => Ok(()),
        }
    }

    /// Create a JaegerSampler from this configuration
    pub fn build_sampler(&self) -> Result<JaegerSampler, SamplerConfigError> {
        JaegerSampler::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_type_from_str() {
        assert_eq!("const".parse(), Ok(SamplerType::Const));
        assert_eq!("probabilistic".parse(), Ok(SamplerType::Probabilistic));
        assert_eq!("ratelimiting".parse(), Ok(SamplerType::RateLimiting));
        assert_eq!("RateLimiting".parse(), Ok(SamplerType::RateLimiting));
        assert!("remote".parse::<SamplerType>().is_err());
        assert!("".parse::<SamplerType>().is_err());
    }

    #[test]
    fn test_sampler_type_display() {
        for sampler_type in [
            SamplerType::Const,
            SamplerType::Probabilistic,
            SamplerType::RateLimiting,
        ] {
            assert_eq!(sampler_type.to_string().parse(), Ok(sampler_type));
        }
        assert_eq!(SamplerType::default(), SamplerType::Const);
    }

    #[test]
    fn test_parse_json_config() {
        let config = SamplerConfig::from_json(r#"{"type": "ratelimiting", "param": 15}"#).unwrap();
        assert_eq!(config.sampler_type, SamplerType::RateLimiting);
        assert_eq!(config.param, 15.0);

        let config = SamplerConfig::from_json(r#"{"type": "probabilistic", "param": 0.25}"#).unwrap();
        assert_eq!(config, SamplerConfig::new(SamplerType::Probabilistic, 0.25));

        // Missing fields use the defaults
        let config = SamplerConfig::from_json("{}").unwrap();
        assert_eq!(config, SamplerConfig::default());
        assert_eq!(config, SamplerConfig::new(SamplerType::Const, 1.0));

        assert!(SamplerConfig::from_json(r#"{"type": "remote"}"#).is_err());
    }

    #[test]
    fn test_to_json() {
        let config = SamplerConfig::new(SamplerType::RateLimiting, 2.5);
        assert_eq!(
            config.to_json().unwrap(),
            r#"{"type":"ratelimiting","param":2.5}"#
        );
    }

    #[test]
    fn test_validate() {
        assert!(SamplerConfig::new(SamplerType::Const, 0.0).validate().is_ok());
        assert!(SamplerConfig::new(SamplerType::Const, -3.0).validate().is_ok());
        assert!(SamplerConfig::new(SamplerType::Probabilistic, 0.0).validate().is_ok());
        assert!(SamplerConfig::new(SamplerType::Probabilistic, 1.0).validate().is_ok());
        assert!(SamplerConfig::new(SamplerType::RateLimiting, 0.0).validate().is_ok());
        assert!(SamplerConfig::new(SamplerType::RateLimiting, 1e6).validate().is_ok());

        assert_eq!(
            SamplerConfig::new(SamplerType::Probabilistic, 1.5).validate(),
            Err(SamplerConfigError::RatioOutOfRange(1.5))
        );
        assert_eq!(
            SamplerConfig::new(SamplerType::RateLimiting, -1.0).validate(),
            Err(SamplerConfigError::NegativeRate(-1.0))
        );
        assert!(matches!(
            SamplerConfig::new(SamplerType::Const, f64::NAN).validate(),
            Err(SamplerConfigError::NonFiniteParam(_))
        ));
        assert_eq!(
            SamplerConfig::new(SamplerType::RateLimiting, f64::INFINITY).validate(),
            Err(SamplerConfigError::NonFiniteParam(f64::INFINITY))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SamplerConfigError::NegativeRate(-2.0).to_string(),
            "ratelimiting sampler param must not be negative, got -2"
        );
    }
}
