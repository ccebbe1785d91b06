//! The round-trip loop measured by the benchmark harness

use super::config::RoundTripConfig;
use crate::error::SerializerResult;
use crate::model::Record;
use crate::serializer::{JsonContract, Serializer, SerializerOptions};
use std::borrow::Cow;
use std::hint::black_box;

/// Where each iteration gets its serializer options from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsStrategy {
    /// Build new options on every iteration
    PerCall,
    /// Reuse the process-wide options
    Cached,
}

impl OptionsStrategy {
    /// Both strategies, in reporting order
    pub const ALL: [OptionsStrategy; 2] = [OptionsStrategy::PerCall, OptionsStrategy::Cached];

    /// Options for one iteration
    pub fn options(self) -> Cow<'static, SerializerOptions> {
        match self {
            OptionsStrategy::PerCall => Cow::Owned(SerializerOptions::round_trip()),
            OptionsStrategy::Cached => Cow::Borrowed(SerializerOptions::shared()),
        }
    }

    /// Short name used in benchmark ids and logs
    pub fn label(self) -> &'static str {
        match self {
            OptionsStrategy::PerCall => "per_call",
            OptionsStrategy::Cached => "cached",
        }
    }
}

/// Encode a value and decode the result under the same options
pub fn round_trip_once<T: JsonContract>(
    value: &T,
    options: &SerializerOptions,
) -> SerializerResult<T> {
    let bytes = Serializer::serialize(value, options)?;
    Serializer::deserialize(&bytes, options)
}

/// Repeats the encode/decode round trip of a record
#[derive(Debug, Clone, Default)]
pub struct RoundTrip {
    config: RoundTripConfig,
}

impl RoundTrip {
    /// Create a runner
    pub fn new(config: RoundTripConfig) -> Self {
        Self { config }
    }

    /// The runner configuration
    pub fn config(&self) -> &RoundTripConfig {
        &self.config
    }

    /// Run every iteration, discarding the decoded records.
    ///
    /// The first failure ends the run.
    pub fn run(&self, record: &Record, strategy: OptionsStrategy) -> SerializerResult<()> {
        let span = tracing::debug_span!(
            "round_trip",
            strategy = strategy.label(),
            iterations = self.config.iterations
        );
        let _enter = span.enter();

        for iteration in 0..self.config.iterations {
            let options = strategy.options();
            let decoded = round_trip_once(record, &options).map_err(|err| {
                tracing::error!(iteration, error = %err, "round trip failed");
                err
            })?;
            black_box(decoded);
        }

        tracing::trace!("run complete");
        Ok(())
    }
}
