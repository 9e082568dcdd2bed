// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, time::Duration};

use jaeger_sampling::{SamplerConfig, SamplerType};

use super::sources::{CompositeSource, ConfigParseError};
use super::supported_configurations::SupportedConfigurations;
use crate::log::TraceLogLevel;

const DEFAULT_AGENT_HOSTNAME: &str = "localhost";
const DEFAULT_AGENT_PORT: u16 = 4317;
const DEFAULT_REPORTER_FLUSH_INTERVAL_MS: u64 = 1000;
const DEFAULT_REPORTER_BUFFER_SIZE: usize = 10000;

#[derive(Debug, Clone)]
#[non_exhaustive]
/// Configuration of the Jaeger tracer
///
/// # Usage
/// ```
/// use jaeger_trace::Config;
///
/// // Reads the JAEGER_* environment variables
/// let mut builder = Config::builder();
///
/// // Manual overrides
/// builder
///     .set_agent_hostname("jaeger-collector".to_string())
///     .set_sampler_type(jaeger_sampling::SamplerType::RateLimiting)
///     .set_sampler_param(15.0);
///
/// let config = builder.build();
/// assert_eq!(config.sampler_config().param, 15.0);
/// ```
pub struct Config {
    // # Agent
    agent_hostname: String,
    agent_port: u16,

    // # Sampling
    sampler_type: SamplerType,
    sampler_param: f64,

    // # Reporter
    /// Delay between two exports of the span batch
    reporter_flush_interval: Duration,
    /// Maximum number of spans sent in one export
    reporter_buffer_size: usize,

    // # Exporter logs
    trace_log_console: bool,
    trace_log_file: Option<PathBuf>,
    trace_log_level: TraceLogLevel,

    /// Values found in the sources that could not be parsed
    parse_errors: Vec<ConfigParseError>,
}

impl Config {
    fn from_sources(sources: &CompositeSource) -> Self {
        use SupportedConfigurations::*;

        let default = Config::default();
        let mut errors = Vec::new();

        let agent_hostname = sources
            .get(JAEGER_AGENT_HOSTNAME)
            .into_value(&mut errors)
            .unwrap_or(default.agent_hostname);
        let agent_port = sources
            .get_parse(JAEGER_AGENT_PORT)
            .into_value(&mut errors)
            .unwrap_or(default.agent_port);
        let sampler_type = sources
            .get_parse(JAEGER_SAMPLER_TYPE)
            .into_value(&mut errors)
            .unwrap_or(default.sampler_type);
        let sampler_param = sources
            .get_parse(JAEGER_SAMPLER_PARAM)
            .into_value(&mut errors)
            .unwrap_or(default.sampler_param);
        let reporter_flush_interval = sources
            .get_parse(JAEGER_REPORTER_FLUSH_INTERVAL)
            .into_value(&mut errors)
            .map(Duration::from_millis)
            .unwrap_or(default.reporter_flush_interval);
        let reporter_buffer_size = sources
            .get_parse(JAEGER_REPORTER_BUFFER_SIZE)
            .into_value(&mut errors)
            .unwrap_or(default.reporter_buffer_size);
        let trace_log_console = sources
            .get_parse(JAEGER_TRACE_LOG_CONSOLE)
            .into_value(&mut errors)
            .unwrap_or(default.trace_log_console);
        let trace_log_file = sources
            .get_parse::<PathBuf>(JAEGER_TRACE_LOG_FILE)
            .into_value(&mut errors)
            .or(default.trace_log_file);
        // Unknown levels turn the exporter logs off instead of falling back
        let trace_log_level = sources
            .get(JAEGER_TRACE_LOG_LEVEL)
            .into_value(&mut errors)
            .map(|level| TraceLogLevel::from_str_or_off(&level))
            .unwrap_or(default.trace_log_level);

        Self {
            agent_hostname,
            agent_port,
            sampler_type,
            sampler_param,
            reporter_flush_interval,
            reporter_buffer_size,
            trace_log_console,
            trace_log_file,
            trace_log_level,
            parse_errors: errors,
        }
    }

    pub(crate) fn builder_with_sources(sources: &CompositeSource) -> ConfigBuilder {
        ConfigBuilder {
            config: Config::from_sources(sources),
        }
    }

    /// Creates a builder, initialized from the environment
    pub fn builder() -> ConfigBuilder {
        Self::builder_with_sources(&CompositeSource::default_sources())
    }

    pub fn agent_hostname(&self) -> &str {
        &self.agent_hostname
    }

    pub fn agent_port(&self) -> u16 {
        self.agent_port
    }

    /// `host:port` of the Jaeger collector
    pub fn agent_endpoint(&self) -> String {
        format!("{}:{}", self.agent_hostname, self.agent_port)
    }

    pub fn sampler_type(&self) -> SamplerType {
        self.sampler_type
    }

    pub fn sampler_param(&self) -> f64 {
        self.sampler_param
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig::new(self.sampler_type, self.sampler_param)
    }

    pub fn reporter_flush_interval(&self) -> Duration {
        self.reporter_flush_interval
    }

    pub fn reporter_buffer_size(&self) -> usize {
        self.reporter_buffer_size
    }

    pub fn trace_log_console(&self) -> bool {
        self.trace_log_console
    }

    pub fn trace_log_file(&self) -> Option<&PathBuf> {
        self.trace_log_file.as_ref()
    }

    pub fn trace_log_level(&self) -> TraceLogLevel {
        self.trace_log_level
    }

    /// The exporter log level, `Off` unless console or file logging is enabled
    pub fn effective_trace_log_level(&self) -> TraceLogLevel {
        if self.trace_log_console || self.trace_log_file.is_some() {
            self.trace_log_level
        } else {
            TraceLogLevel::Off
        }
    }

    pub fn parse_errors(&self) -> &[ConfigParseError] {
        &self.parse_errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            agent_hostname: DEFAULT_AGENT_HOSTNAME.to_string(),
            agent_port: DEFAULT_AGENT_PORT,
            sampler_type: SamplerType::default(),
            sampler_param: SamplerConfig::default().param,
            reporter_flush_interval: Duration::from_millis(DEFAULT_REPORTER_FLUSH_INTERVAL_MS),
            reporter_buffer_size: DEFAULT_REPORTER_BUFFER_SIZE,
            trace_log_console: false,
            trace_log_file: None,
            trace_log_level: TraceLogLevel::default(),
            parse_errors: Vec::new(),
        }
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Finalizes the builder and returns the configuration
    pub fn build(self) -> Config {
        self.config
    }

    pub fn set_agent_hostname(&mut self, hostname: String) -> &mut Self {
        self.config.agent_hostname = hostname;
        self
    }

    pub fn set_agent_port(&mut self, port: u16) -> &mut Self {
        self.config.agent_port = port;
        self
    }

    pub fn set_sampler_type(&mut self, sampler_type: SamplerType) -> &mut Self {
        self.config.sampler_type = sampler_type;
        self
    }

    pub fn set_sampler_param(&mut self, param: f64) -> &mut Self {
        self.config.sampler_param = param;
        self
    }

    pub fn set_sampler(&mut self, sampler: SamplerConfig) -> &mut Self {
        self.config.sampler_type = sampler.sampler_type;
        self.config.sampler_param = sampler.param;
        self
    }

    pub fn set_reporter_flush_interval(&mut self, interval: Duration) -> &mut Self {
        self.config.reporter_flush_interval = interval;
        self
    }

    pub fn set_reporter_buffer_size(&mut self, size: usize) -> &mut Self {
        self.config.reporter_buffer_size = size;
        self
    }

    pub fn set_trace_log_console(&mut self, enabled: bool) -> &mut Self {
        self.config.trace_log_console = enabled;
        self
    }

    pub fn set_trace_log_file(&mut self, path: PathBuf) -> &mut Self {
        self.config.trace_log_file = Some(path);
        self
    }

    pub fn set_trace_log_level(&mut self, level: TraceLogLevel) -> &mut Self {
        self.config.trace_log_level = level;
        self
    }
}
