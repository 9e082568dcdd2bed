// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use opentelemetry::trace::{SamplingDecision, SamplingResult, TraceId};
use opentelemetry::{Context, KeyValue};
use opentelemetry_sdk::trace::{Sampler, ShouldSample};
use std::fmt;

use crate::config::{SamplerConfig, SamplerConfigError, SamplerType};
use crate::rate_limiting_sampler::RateLimitingSampler;

/// The sampler installed in the tracer provider.
///
/// The strategy is picked once from a [`SamplerConfig`]; sampling then dispatches on the
/// variant.
#[derive(Debug, Clone)]
pub enum JaegerSampler {
    /// Samples every span when `true`, none when `false`
    Const(bool),
    /// Samples this ratio of traces, based on the trace id
    Probabilistic(f64),
    /// Samples at most a fixed number of spans per second
    RateLimiting(RateLimitingSampler),
}

impl JaegerSampler {
    /// Selects and builds the sampler described by `config`.
    ///
    /// For `const`, only the integer part of the param is considered: `0.5` drops everything.
    pub fn from_config(config: &SamplerConfig) -> Result<Self, SamplerConfigError> {
        config.validate()?;
        Ok(match config.sampler_type {
            SamplerType::Const => JaegerSampler::Const(config.param.trunc() != 0.0),
            SamplerType::Probabilistic => JaegerSampler::Probabilistic(config.param),
            SamplerType::RateLimiting => {
                JaegerSampler::RateLimiting(RateLimitingSampler::new(config.param))
            }
        })
    }

    pub fn sampler_type(&self) -> SamplerType {
        match self {
            JaegerSampler::Const(_) => SamplerType::Const,
            JaegerSampler::Probabilistic(_) => SamplerType::Probabilistic,
            JaegerSampler::RateLimiting(_) => SamplerType::RateLimiting,
        }
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JaegerSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JaegerSampler::Const(true) => f.write_str("AlwaysOnSampler"),
            JaegerSampler::Const(false) => f.write_str("AlwaysOffSampler"),
            JaegerSampler::Probabilistic(ratio) => write!(f, "TraceIdRatioBased{{{ratio:.6}}}"),
            JaegerSampler::RateLimiting(sampler) => fmt::Display::fmt(sampler, f),
        }
    }
}

impl ShouldSample for JaegerSampler {
    fn should_sample(
        &self,
        parent_context: Option<&Context>,
        trace_id: TraceId,
        name: &str,
        span_kind: &opentelemetry::trace::SpanKind,
        attributes: &[KeyValue],
        links: &[opentelemetry::trace::Link],
    ) -> SamplingResult {
        match self {
            JaegerSampler::Const(sample) => SamplingResult {
                decision: if *sample {
                    SamplingDecision::RecordAndSample
                } else {
                    SamplingDecision::Drop
                },
                attributes: Vec::new(),
                trace_state: Default::default(),
            },
            JaegerSampler::Probabilistic(ratio) => Sampler::TraceIdRatioBased(*ratio)
                .should_sample(
                    parent_context,
                    trace_id,
                    name,
                    span_kind,
                    attributes,
                    links,
                ),
            JaegerSampler::RateLimiting(sampler) => sampler.should_sample(
                parent_context,
                trace_id,
                name,
                span_kind,
                attributes,
                links,
            ),
        }
    }
}
