// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by [`crate::Config`]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedConfigurations {
    JAEGER_AGENT_HOSTNAME,
    JAEGER_AGENT_PORT,
    JAEGER_SAMPLER_TYPE,
    JAEGER_SAMPLER_PARAM,
    JAEGER_REPORTER_FLUSH_INTERVAL,
    JAEGER_REPORTER_BUFFER_SIZE,
    JAEGER_TRACE_LOG_CONSOLE,
    JAEGER_TRACE_LOG_FILE,
    JAEGER_TRACE_LOG_LEVEL,
}

impl SupportedConfigurations {
    pub const ALL: [SupportedConfigurations; 9] = [
        SupportedConfigurations::JAEGER_AGENT_HOSTNAME,
        SupportedConfigurations::JAEGER_AGENT_PORT,
        SupportedConfigurations::JAEGER_SAMPLER_TYPE,
        SupportedConfigurations::JAEGER_SAMPLER_PARAM,
        SupportedConfigurations::JAEGER_REPORTER_FLUSH_INTERVAL,
        SupportedConfigurations::JAEGER_REPORTER_BUFFER_SIZE,
        SupportedConfigurations::JAEGER_TRACE_LOG_CONSOLE,
        SupportedConfigurations::JAEGER_TRACE_LOG_FILE,
        SupportedConfigurations::JAEGER_TRACE_LOG_LEVEL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedConfigurations::JAEGER_AGENT_HOSTNAME => "JAEGER_AGENT_HOSTNAME",
            SupportedConfigurations::JAEGER_AGENT_PORT => "JAEGER_AGENT_PORT",
            SupportedConfigurations::JAEGER_SAMPLER_TYPE => "JAEGER_SAMPLER_TYPE",
            SupportedConfigurations::JAEGER_SAMPLER_PARAM => "JAEGER_SAMPLER_PARAM",
            SupportedConfigurations::JAEGER_REPORTER_FLUSH_INTERVAL => {
                "JAEGER_REPORTER_FLUSH_INTERVAL"
            }
            SupportedConfigurations::JAEGER_REPORTER_BUFFER_SIZE => "JAEGER_REPORTER_BUFFER_SIZE",
            SupportedConfigurations::JAEGER_TRACE_LOG_CONSOLE => "JAEGER_TRACE_LOG_CONSOLE",
            SupportedConfigurations::JAEGER_TRACE_LOG_FILE => "JAEGER_TRACE_LOG_FILE",
            SupportedConfigurations::JAEGER_TRACE_LOG_LEVEL => "JAEGER_TRACE_LOG_LEVEL",
        }
    }
}
