// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Configuration of the Jaeger tracer.
//!
//! Each value is resolved from the first source holding a parseable value:
//!
//! ```text
//!   ConfigBuilder setters      highest
//!          |
//!   JAEGER_* env variables
//!          |
//!   Config::default()          lowest
//! ```

#[allow(clippy::module_inception)]
mod configuration;
mod sources;
mod supported_configurations;

pub use configuration::{Config, ConfigBuilder};
pub use sources::{ConfigParseError, ConfigSourceOrigin};
pub use supported_configurations::SupportedConfigurations;
