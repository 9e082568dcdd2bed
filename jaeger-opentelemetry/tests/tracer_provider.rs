// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use jaeger_opentelemetry::{init_jaeger, JaegerTracerProvider};
use jaeger_sampling::{SamplerConfig, SamplerType};
use jaeger_trace::Config;
use opentelemetry::{
    propagation::TextMapPropagator,
    trace::{TraceContextExt, Tracer, TracerProvider},
    Context, KeyValue, Value,
};
use opentelemetry_sdk::{
    error::OTelSdkResult,
    trace::{InMemorySpanExporter, SdkTracerProvider, SpanData, SpanExporter},
};

fn jaeger_provider(sampler_type: SamplerType, param: f64) -> JaegerTracerProvider {
    let mut builder = Config::builder();
    builder
        .set_sampler(SamplerConfig::new(sampler_type, param))
        // Only force_flush exports during the tests
        .set_reporter_flush_interval(Duration::from_secs(3600));
    JaegerTracerProvider::new(builder.build()).unwrap()
}

fn finish_spans(provider: &SdkTracerProvider, count: usize) {
    let tracer = provider.tracer("test");
    for i in 0..count {
        tracer.in_span(format!("operation-{i}"), |_| {});
    }
}

fn exported(provider: &SdkTracerProvider, exporter: &InMemorySpanExporter) -> Vec<SpanData> {
    provider.force_flush().unwrap();
    exporter.get_finished_spans().unwrap()
}

fn attribute<'a>(span: &'a SpanData, key: &str) -> Option<&'a Value> {
    span.attributes
        .iter()
        .find(|kv| kv.key.as_str() == key)
        .map(|kv| &kv.value)
}

#[test]
fn test_rate_limiting_exports_one_span_at_rate_zero() {
    let jaeger = jaeger_provider(SamplerType::RateLimiting, 0.0);
    let exporter = InMemorySpanExporter::default();
    let provider = jaeger.build_provider(exporter.clone(), "checkout");

    finish_spans(&provider, 20);

    let spans = exported(&provider, &exporter);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].name, "operation-0");
    assert_eq!(
        attribute(&spans[0], "sampler.type"),
        Some(&Value::from("ratelimiting"))
    );
    assert_eq!(attribute(&spans[0], "sampler.param"), Some(&Value::F64(0.0)));
    provider.shutdown().unwrap();
}

#[test]
fn test_rate_limiting_admits_a_burst() {
    let jaeger = jaeger_provider(SamplerType::RateLimiting, 5.0);
    let exporter = InMemorySpanExporter::default();
    let provider = jaeger.build_provider(exporter.clone(), "checkout");

    finish_spans(&provider, 50);

    // 5 from the initial burst, plus whatever accrued while the spans were created
    let count = exported(&provider, &exporter).len();
    assert!((5..=7).contains(&count), "exported {count} spans");
}

#[test]
fn test_child_spans_draw_their_own_credit() {
    let jaeger = jaeger_provider(SamplerType::RateLimiting, 1.0);
    let exporter = InMemorySpanExporter::default();
    let provider = jaeger.build_provider(exporter.clone(), "checkout");

    let tracer = provider.tracer("test");
    tracer.in_span("root", |cx| {
        assert!(cx.span().span_context().is_sampled());
        tracer.in_span("child", |cx| {
            assert!(!cx.span().span_context().is_sampled());
        });
    });

    let spans = exported(&provider, &exporter);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].name, "root");
}

#[test]
fn test_const_sampler() {
    for (param, expected) in [(0.0, 0), (1.0, 10)] {
        let jaeger = jaeger_provider(SamplerType::Const, param);
        let exporter = InMemorySpanExporter::default();
        let provider = jaeger.build_provider(exporter.clone(), "checkout");

        finish_spans(&provider, 10);

        let spans = exported(&provider, &exporter);
        assert_eq!(spans.len(), expected, "const sampler with param {param}");
        assert!(spans.iter().all(|s| s.attributes.is_empty()));
    }
}

#[test]
fn test_probabilistic_bounds() {
    for (param, expected) in [(0.0, 0), (1.0, 10)] {
        let jaeger = jaeger_provider(SamplerType::Probabilistic, param);
        let exporter = InMemorySpanExporter::default();
        let provider = jaeger.build_provider(exporter.clone(), "checkout");

        finish_spans(&provider, 10);

        assert_eq!(exported(&provider, &exporter).len(), expected);
    }
}

#[test]
fn test_reporter_buffer_size_bounds_batches() {
    let mut builder = Config::builder();
    builder
        .set_sampler(SamplerConfig::new(SamplerType::Const, 1.0))
        .set_reporter_buffer_size(3)
        .set_reporter_flush_interval(Duration::from_secs(3600));
    let jaeger = JaegerTracerProvider::new(builder.build()).unwrap();
    let exporter = InMemorySpanExporter::default();
    let provider = jaeger.build_provider(exporter.clone(), "checkout");

    finish_spans(&provider, 8);

    assert_eq!(exported(&provider, &exporter).len(), 8);
}

/// Keeps the exported spans after shutdown
#[derive(Debug, Clone, Default)]
struct KeepingExporter(Arc<Mutex<Vec<SpanData>>>);

impl SpanExporter for KeepingExporter {
    async fn export(&self, batch: Vec<SpanData>) -> OTelSdkResult {
        self.0.lock().unwrap().extend(batch);
        Ok(())
    }
}

#[test]
fn test_tracer_is_named_jaeger() {
    let jaeger = jaeger_provider(SamplerType::Const, 1.0);
    let exporter = KeepingExporter::default();
    let tracer = jaeger.tracer(exporter.clone(), "checkout");

    tracer.in_span("op", |_| {});
    // Dropping the last handle on the provider shuts it down, exporting the batch
    drop(tracer);

    let spans = exporter.0.lock().unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].instrumentation_scope.name(), "jaeger");
}

#[test]
fn test_propagator_round_trip() {
    let jaeger = jaeger_provider(SamplerType::Const, 1.0);
    let propagator = jaeger.propagator();
    let carrier = HashMap::from([(
        "traceparent".to_string(),
        "00-80f198ee56343ba864fe8b2a57d3eff7-00f067aa0ba902b7-01".to_string(),
    )]);

    let cx = propagator.extract(&carrier);
    assert_eq!(
        cx.span().span_context().trace_id().to_string(),
        "80f198ee56343ba864fe8b2a57d3eff7"
    );

    let mut injected = HashMap::new();
    propagator.inject_context(&cx, &mut injected);
    assert_eq!(injected.get("traceparent"), carrier.get("traceparent"));

    let mut empty = HashMap::new();
    propagator.inject_context(&Context::new(), &mut empty);
    assert!(!empty.contains_key("traceparent"));
}

#[test]
fn test_init_jaeger_installs_globals() {
    let mut builder = Config::builder();
    builder.set_sampler(SamplerConfig::new(SamplerType::RateLimiting, 0.0));
    let exporter = InMemorySpanExporter::default();

    let provider = init_jaeger(builder.build(), exporter.clone(), "checkout").unwrap();

    let tracer = opentelemetry::global::tracer("app");
    for i in 0..5 {
        tracer.in_span(format!("global-{i}"), |_| {});
    }
    provider.force_flush().unwrap();

    let spans = exporter.get_finished_spans().unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].name, "global-0");
    assert!(spans[0]
        .attributes
        .contains(&KeyValue::new("sampler.type", "ratelimiting")));
}

#[test]
fn test_init_jaeger_rejects_invalid_sampler() {
    let mut builder = Config::builder();
    builder.set_sampler(SamplerConfig::new(SamplerType::Probabilistic, 1.5));

    let err = init_jaeger(builder.build(), InMemorySpanExporter::default(), "checkout").unwrap_err();
    assert_eq!(err.to_string(), "invalid Jaeger sampler configuration");
}
