// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use opentelemetry::trace::{SamplingDecision, SamplingResult, TraceId};
use opentelemetry::{Context, KeyValue};
use opentelemetry_sdk::trace::ShouldSample;
use std::fmt;

use crate::constants::{attr, limiter, sampler_type};
use crate::rate_limiter::RateLimiter;

/// Samples at most `traces_per_second` spans per second.
///
/// Every call to `should_sample` draws one credit from its own [`RateLimiter`], regardless of
/// the trace or parent the span belongs to. A child span can therefore be dropped while its
/// root was sampled.
#[derive(Clone)]
pub struct RateLimitingSampler {
    traces_per_second: f64,
    rate_limiter: RateLimiter,
}

impl fmt::Debug for RateLimitingSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimitingSampler")
            .field("traces_per_second", &self.traces_per_second)
            .finish()
    }
}

impl RateLimitingSampler {
    pub const TYPE: &'static str = sampler_type::RATE_LIMITING;

    /// `traces_per_second` must be finite and non-negative. The burst capacity is
    /// `max(traces_per_second, 1.0)`, so a rate of 0 still lets one span through.
    pub fn new(traces_per_second: f64) -> Self {
        let max_balance = traces_per_second.max(limiter::MIN_MAX_BALANCE);
        RateLimitingSampler {
            traces_per_second,
            rate_limiter: RateLimiter::new(traces_per_second, max_balance),
        }
    }

    #[cfg(test)]
    fn with_limiter(traces_per_second: f64, rate_limiter: RateLimiter) -> Self {
        RateLimitingSampler {
            traces_per_second,
            rate_limiter,
        }
    }

    pub fn traces_per_second(&self) -> f64 {
        self.traces_per_second
    }

    /// Human readable identity of the sampler, e.g. `RateLimitingSampler{15.00}`
    pub fn description(&self) -> String {
        self.to_string()
    }

    fn sampled_attributes(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new(attr::SAMPLER_TYPE, Self::TYPE),
            KeyValue::new(attr::SAMPLER_PARAM, self.traces_per_second),
        ]
    }
}

impl fmt::Display for RateLimitingSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RateLimitingSampler{{{:.2}}}", self.traces_per_second)
    }
}

impl ShouldSample for RateLimitingSampler {
    fn should_sample(
        &self,
        _parent_context: Option<&Context>,
        _trace_id: TraceId,
        _name: &str,
        _span_kind: &opentelemetry::trace::SpanKind,
        _attributes: &[KeyValue],
        _links: &[opentelemetry::trace::Link],
    ) -> SamplingResult {
        if self.rate_limiter.check_credit(limiter::CREDITS_PER_SPAN) {
            SamplingResult {
                decision: SamplingDecision::RecordAndSample,
                attributes: self.sampled_attributes(),
                trace_state: Default::default(),
            }
        } else {
            SamplingResult {
                decision: SamplingDecision::Drop,
                attributes: Vec::new(),
                trace_state: Default::default(),
            }
        }
    }
}
