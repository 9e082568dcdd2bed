// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Logs of the span exporter.
//!
//! The exporter reports what it sends through `tracing` events under
//! [`EXPORTER_LOG_TARGET`]. They are only emitted when console or file logging is configured,
//! and [`trace_log_layers`] builds the `tracing-subscriber` layers writing them out.

use std::{
    fmt::{self, Display},
    fs::OpenOptions,
    str::FromStr,
    sync::Mutex,
};

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::{filter::Targets, fmt as subscriber_fmt, registry::LookupSpan, Layer};

use crate::{constants::EXPORTER_LOG_TARGET, Config, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd)]
#[non_exhaustive]
/// The level at which the span exporter logs
pub enum TraceLogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl TraceLogLevel {
    /// Parses a level, turning anything unknown into `Off`
    pub fn from_str_or_off(s: &str) -> Self {
        s.parse().unwrap_or(TraceLogLevel::Off)
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            TraceLogLevel::Off => LevelFilter::OFF,
            TraceLogLevel::Error => LevelFilter::ERROR,
            TraceLogLevel::Warn => LevelFilter::WARN,
            TraceLogLevel::Info => LevelFilter::INFO,
            TraceLogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl FromStr for TraceLogLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("debug") {
            Ok(TraceLogLevel::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(TraceLogLevel::Info)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(TraceLogLevel::Warn)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(TraceLogLevel::Error)
        } else if s.eq_ignore_ascii_case("off") {
            Ok(TraceLogLevel::Off)
        } else {
            Err("trace log level should be one of DEBUG, INFO, WARN, ERROR, OFF")
        }
    }
}

impl Display for TraceLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            TraceLogLevel::Debug => "DEBUG",
            TraceLogLevel::Info => "INFO",
            TraceLogLevel::Warn => "WARN",
            TraceLogLevel::Error => "ERROR",
            TraceLogLevel::Off => "OFF",
        };

        write!(f, "{level}")
    }
}

/// Boxed layer, so console and file outputs can be combined in a `Vec`
pub type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Builds the layers writing the exporter's logs to the console and/or the trace log file.
///
/// Returns no layers when neither output is configured. The file is created if missing and
/// appended to. The returned `Vec` is itself a layer:
///
/// ```no_run
/// use tracing_subscriber::layer::SubscriberExt;
/// use tracing_subscriber::util::SubscriberInitExt;
///
/// let config = jaeger_trace::Config::builder().build();
/// let layers = jaeger_trace::log::trace_log_layers(&config).unwrap();
/// tracing_subscriber::registry().with(layers).init();
/// ```
pub fn trace_log_layers<S>(config: &Config) -> Result<Vec<BoxedLayer<S>>>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let targets = Targets::new().with_target(
        EXPORTER_LOG_TARGET,
        config.effective_trace_log_level().level_filter(),
    );

    let mut layers: Vec<BoxedLayer<S>> = Vec::new();
    if config.trace_log_console() {
        layers.push(
            subscriber_fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(targets.clone())
                .boxed(),
        );
    }
    if let Some(path) = config.trace_log_file() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                crate::Error::from(e).context(format!("cannot open trace log file {}", path.display()))
            })?;
        layers.push(
            subscriber_fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(targets)
                .boxed(),
        );
    }
    Ok(layers)
}
