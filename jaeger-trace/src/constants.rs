// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Name of the tracer provider, and of the tracers it hands out
pub const TRACER_NAME: &str = "jaeger";

/// `tracing` target of the span exporter's logs
pub const EXPORTER_LOG_TARGET: &str = "jaeger::exporter";
