//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`search`]: Run one filtered listing search
//! - [`suggest`]: Look up destination suggestions
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use wayfarer::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink, WayfarerConfig};

pub mod output;
pub mod search;
pub mod suggest;

/// Returns the telemetry sink selected by configuration.
#[must_use]
pub fn telemetry_sink(config: &WayfarerConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
