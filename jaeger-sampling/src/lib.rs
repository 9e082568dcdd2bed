// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Jaeger-style samplers for the OpenTelemetry SDK.
//!
//! The [`RateLimitingSampler`] caps the number of sampled spans per second with a
//! continuous token bucket ([`RateLimiter`]). [`JaegerSampler`] selects one of the
//! `const`, `probabilistic` or `ratelimiting` strategies once, at configuration time.

pub mod config;
pub mod constants;
pub mod rate_limiter;
pub mod rate_limiting_sampler;
pub mod sampler;

// Re-exports for convenient usage
pub use config::{SamplerConfig, SamplerConfigError, SamplerType};
pub use rate_limiter::RateLimiter;
pub use rate_limiting_sampler::RateLimitingSampler;
pub use sampler::JaegerSampler;
