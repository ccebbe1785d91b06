//! Round-trip runner
//!
//! Each run encodes the same record and decodes it back a fixed number of
//! times. The two [`OptionsStrategy`] variants differ only in how long the
//! serializer options live: one iteration, or the whole process.

pub mod config;
pub mod round_trip;

pub use config::RoundTripConfig;
pub use round_trip::{round_trip_once, OptionsStrategy, RoundTrip};

/// Runner constants
pub mod constants {
    //! Constants used by the round-trip runner

    /// Round trips per run unless overridden
    pub const DEFAULT_ITERATIONS: usize = 10_000;

    /// Environment variable overriding the iteration count
    pub const ITERATIONS_ENV: &str = "ROUNDTRIP_ITERATIONS";
}
