// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use jaeger_trace::{Config, Error, Result};
use opentelemetry_otlp::WithExportConfig;

/// OTLP gRPC span exporter sending to the configured Jaeger collector.
///
/// Exports run on the tokio runtime of the caller.
pub fn otlp_span_exporter(config: &Config) -> Result<opentelemetry_otlp::SpanExporter> {
    let endpoint = format!("http://{}", config.agent_endpoint());
    opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.as_str())
        .build()
        .map_err(|e| Error::from(e).context(format!("cannot create OTLP exporter for {endpoint}")))
}
