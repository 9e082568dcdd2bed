// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! OpenTelemetry tracer provider publishing spans to Jaeger, sampled with the Jaeger
//! `const`, `probabilistic` or `ratelimiting` strategies.

mod span_exporter;

#[cfg(feature = "otlp")]
mod otlp;

use jaeger_sampling::JaegerSampler;
use jaeger_trace::{constants::TRACER_NAME, Config, Error, Result};
use opentelemetry::{trace::TracerProvider, KeyValue};
use opentelemetry_sdk::{
    propagation::TraceContextPropagator,
    trace::{BatchConfigBuilder, BatchSpanProcessor, SdkTracer, SdkTracerProvider, SpanExporter},
    Resource,
};
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;

pub use span_exporter::JaegerExporter;

#[cfg(feature = "otlp")]
pub use otlp::otlp_span_exporter;

/// Default queue size of the batch span processor
const MIN_MAX_QUEUE_SIZE: usize = 2048;

/// Builds tracer providers exporting to Jaeger.
///
/// The sampler is selected once, when the provider is created. Every SDK provider built from
/// it shares that sampler, and so the same rate limiter.
#[derive(Debug, Clone)]
pub struct JaegerTracerProvider {
    config: Config,
    sampler: JaegerSampler,
}

impl JaegerTracerProvider {
    pub fn new(config: Config) -> Result<Self> {
        for error in config.parse_errors() {
            tracing::warn!("{error}");
        }
        let sampler = JaegerSampler::from_config(&config.sampler_config())
            .map_err(|e| Error::from(e).context("invalid Jaeger sampler configuration"))?;
        Ok(Self { config, sampler })
    }

    pub fn name(&self) -> &'static str {
        TRACER_NAME
    }

    pub fn sampler(&self) -> &JaegerSampler {
        &self.sampler
    }

    /// `host:port` the spans are published to
    pub fn endpoint(&self) -> String {
        self.config.agent_endpoint()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates an SDK tracer provider exporting through `exporter`.
    ///
    /// Spans are batched: a batch is sent every flush interval, holding at most the reporter
    /// buffer size.
    pub fn build_provider<E>(&self, exporter: E, service_name: impl Into<String>) -> SdkTracerProvider
    where
        E: SpanExporter + 'static,
    {
        let buffer_size = self.config.reporter_buffer_size().max(1);
        let batch_config = BatchConfigBuilder::default()
            .with_max_queue_size(buffer_size.max(MIN_MAX_QUEUE_SIZE))
            .with_max_export_batch_size(buffer_size)
            .with_scheduled_delay(self.config.reporter_flush_interval())
            .build();
        let processor = BatchSpanProcessor::builder(JaegerExporter::from_config(exporter, &self.config))
            .with_batch_config(batch_config)
            .build();

        SdkTracerProvider::builder()
            .with_span_processor(processor)
            .with_sampler(self.sampler.clone())
            .with_resource(
                Resource::builder_empty()
                    .with_attributes([KeyValue::new(SERVICE_NAME, service_name.into())])
                    .build(),
            )
            .build()
    }

    /// Tracer named after this provider, from a new SDK provider
    pub fn tracer<E>(&self, exporter: E, service_name: impl Into<String>) -> SdkTracer
    where
        E: SpanExporter + 'static,
    {
        self.build_provider(exporter, service_name).tracer(TRACER_NAME)
    }

    /// Propagates the W3C `traceparent` and `tracestate` headers
    pub fn propagator(&self) -> TraceContextPropagator {
        TraceContextPropagator::new()
    }
}

/// Initialize the Jaeger tracer provider.
///
/// Installs the SDK provider and the W3C trace context propagator as the global ones.
///
/// # Usage
/// ```rust
/// use opentelemetry_sdk::trace::InMemorySpanExporter;
///
/// // This picks up the JAEGER_* env var configuration
/// let config = jaeger_trace::Config::builder().build();
///
/// let provider = jaeger_opentelemetry::init_jaeger(
///     config,
///     InMemorySpanExporter::default(), // The transport the spans are sent with
///     "checkout",
/// )
/// .unwrap();
/// # let _ = provider.shutdown();
/// ```
pub fn init_jaeger<E>(
    config: Config,
    exporter: E,
    service_name: impl Into<String>,
) -> Result<SdkTracerProvider>
where
    E: SpanExporter + 'static,
{
    let jaeger = JaegerTracerProvider::new(config)?;
    let provider = jaeger.build_provider(exporter, service_name);

    opentelemetry::global::set_text_map_propagator(jaeger.propagator());
    opentelemetry::global::set_tracer_provider(provider.clone());
    tracing::info!(
        "started publishing traces to Jaeger on {}",
        jaeger.endpoint()
    );
    Ok(provider)
}
