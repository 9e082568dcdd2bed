// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use jaeger_trace::{constants::EXPORTER_LOG_TARGET, log::TraceLogLevel, Config};
use opentelemetry_sdk::{
    error::OTelSdkResult,
    trace::{SpanData, SpanExporter},
    Resource,
};
use tracing::{level_filters::LevelFilter, Level};

/// Span exporter reporting each export to the trace logs, before handing the batch to the
/// transport exporter.
///
/// Results of the inner exporter are returned unchanged.
#[derive(Debug)]
pub struct JaegerExporter<E> {
    inner: E,
    endpoint: String,
    log_level: LevelFilter,
}

impl<E: SpanExporter> JaegerExporter<E> {
    pub fn new(inner: E, endpoint: String, log_level: TraceLogLevel) -> Self {
        Self {
            inner,
            endpoint,
            log_level: log_level.level_filter(),
        }
    }

    /// Wraps `inner`, logging as configured in `config`
    pub fn from_config(inner: E, config: &Config) -> Self {
        Self::new(
            inner,
            config.agent_endpoint(),
            config.effective_trace_log_level(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    fn enabled(&self, level: Level) -> bool {
        level <= self.log_level
    }
}

impl<E: SpanExporter> SpanExporter for JaegerExporter<E> {
    async fn export(&self, batch: Vec<SpanData>) -> OTelSdkResult {
        if self.enabled(Level::INFO) {
            tracing::info!(
                target: EXPORTER_LOG_TARGET,
                "Attempting to export {} spans to endpoint {}",
                batch.len(),
                self.endpoint
            );
        }
        if self.enabled(Level::DEBUG) {
            tracing::debug!(target: EXPORTER_LOG_TARGET, spans = ?batch, "export payload");
        }

        let result = self.inner.export(batch).await;
        if let Err(e) = &result {
            if self.enabled(Level::ERROR) {
                tracing::error!(
                    target: EXPORTER_LOG_TARGET,
                    "Failed to export spans to endpoint {}: {e}",
                    self.endpoint
                );
            }
        }
        result
    }

    fn shutdown_with_timeout(&mut self, timeout: Duration) -> OTelSdkResult {
        self.inner.shutdown_with_timeout(timeout)
    }

    fn shutdown(&mut self) -> OTelSdkResult {
        self.inner.shutdown()
    }

    fn force_flush(&mut self) -> OTelSdkResult {
        self.inner.force_flush()
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.inner.set_resource(resource)
    }
}
