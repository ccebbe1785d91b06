//! Per-call and cached options must behave identically

use super::assert_json_equal;
use serializer_options_bench::prelude::*;

#[test]
fn test_strategies_produce_identical_bytes() {
    let per_call = Serializer::serialize(fixture(), &OptionsStrategy::PerCall.options())
        .expect("Failed to serialize with per-call options");
    let cached = Serializer::serialize(fixture(), &OptionsStrategy::Cached.options())
        .expect("Failed to serialize with cached options");

    assert_eq!(per_call, cached);
}

#[test]
fn test_strategies_agree_without_closed_date() {
    let record = Record {
        closed: None,
        ..fixture().clone()
    };
    let per_call = Serializer::serialize(&record, &SerializerOptions::round_trip())
        .expect("Failed to serialize with per-call options");
    let cached = Serializer::serialize(&record, SerializerOptions::shared())
        .expect("Failed to serialize with cached options");

    let expected = String::from_utf8(cached).expect("encoded output is UTF-8");
    assert_json_equal(&per_call, &expected, "per-call vs cached");
}

#[test]
fn test_cross_strategy_decode() {
    let bytes = Serializer::serialize(fixture(), &SerializerOptions::round_trip())
        .expect("Failed to serialize with per-call options");
    let decoded: Record = Serializer::deserialize(&bytes, SerializerOptions::shared())
        .expect("Failed to deserialize with cached options");
    assert_eq!(&decoded, fixture());
}

#[test]
fn test_fixture_unchanged_after_full_runs() {
    let before = fixture().clone();
    let runner = RoundTrip::new(RoundTripConfig::default());

    for strategy in OptionsStrategy::ALL {
        runner
            .run(fixture(), strategy)
            .unwrap_or_else(|err| panic!("{} run failed: {}", strategy.label(), err));
    }

    assert_eq!(runner.config().iterations, 10_000);
    assert_eq!(fixture(), &before);
}
