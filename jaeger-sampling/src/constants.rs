// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Shared constants for the jaeger-sampling crate

/// Sampler type identifiers, as written in configuration
pub mod sampler_type {
    /// Samples every span or none of them
    pub const CONST: &str = "const";
    /// Samples a fixed ratio of traces based on the trace id
    pub const PROBABILISTIC: &str = "probabilistic";
    /// Samples at most a fixed number of spans per second
    pub const RATE_LIMITING: &str = "ratelimiting";
}

/// Attribute keys attached to sampled spans
pub mod attr {
    /// Which sampler took the decision
    pub const SAMPLER_TYPE: &str = "sampler.type";
    /// The parameter the sampler was configured with
    pub const SAMPLER_PARAM: &str = "sampler.param";
}

/// Rate limiter tuning
pub mod limiter {
    /// Lowest burst capacity of a rate limiting sampler, so that very low rates
    /// still admit one span straight away
    pub const MIN_MAX_BALANCE: f64 = 1.0;
    /// Credits drawn for each sampling decision
    pub const CREDITS_PER_SPAN: f64 = 1.0;
}

/// Ratio bounds for probabilistic sampling
pub mod ratio {
    pub const MIN_SAMPLE_RATE: f64 = 0.0;
    pub const MAX_SAMPLE_RATE: f64 = 1.0;
}
