//! Allocation pressure of the two options strategies
//!
//! Kept in its own test binary with a single test so the counting allocator
//! only sees the runs being compared.

use serializer_options_bench::prelude::*;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingAllocator;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations_for(runner: &RoundTrip, strategy: OptionsStrategy) -> usize {
    let before = ALLOCATIONS.load(Ordering::Relaxed);
    runner.run(fixture(), strategy).expect("run failed");
    ALLOCATIONS.load(Ordering::Relaxed) - before
}

#[test]
fn test_per_call_options_allocate_more_than_cached() {
    let iterations = 200;
    let runner = RoundTrip::new(RoundTripConfig::with_iterations(iterations));

    // Build the fixture and the shared options outside the measured runs
    runner.run(fixture(), OptionsStrategy::Cached).expect("warm-up failed");

    let per_call = allocations_for(&runner, OptionsStrategy::PerCall);
    let cached = allocations_for(&runner, OptionsStrategy::Cached);

    // Each per-call iteration allocates at least the converter list and its pattern
    assert!(
        per_call >= cached + iterations,
        "per-call: {} allocations, cached: {} allocations",
        per_call,
        cached
    );
}
