//! Data model for the round-trip benchmark
//!
//! A [`Record`] owns exactly one [`Nested`] sub-record, carries two
//! [`DateOnly`] fields, the second of which is optional, and one [`Decimal`].

pub mod date_only;
pub mod decimal;
pub mod fixture;
pub mod record;

pub use date_only::{DateOnly, DEFAULT_DATE_FORMAT};
pub use decimal::Decimal;
pub use fixture::fixture;
pub use record::{Nested, Record};
