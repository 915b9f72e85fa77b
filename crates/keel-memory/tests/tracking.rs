//! Ownership lifecycle checks under a tracking allocator
//!
//! Everything lives in one test function: the tracker is installed as the
//! process-wide allocator, and parallel tests would otherwise perturb the
//! counters.

use keel_memory::{AllocRange, SystemAllocator, TrackingAllocator, install_runtime_allocator};

static TRACKER: TrackingAllocator<SystemAllocator> =
    TrackingAllocator::new(SystemAllocator::new());

#[test]
fn allocation_lifecycle_is_balanced() {
    install_runtime_allocator(&TRACKER).expect("tracker must be installed before first use");

    // grow from empty, then clear
    let mut r = AllocRange::new();
    r.resize(16);
    assert_eq!(r.len(), 16);
    assert!(!r.as_ptr().is_null());
    assert_eq!(TRACKER.live_blocks(), 1);

    r.clear();
    assert_eq!(r.len(), 0);
    assert_eq!(TRACKER.live_blocks(), 0);
    assert_eq!(TRACKER.free_count(), 1);

    // shrink keeps a single live block
    r.resize(16);
    r.resize(4);
    assert_eq!(r.len(), 4);
    assert_eq!(TRACKER.live_blocks(), 1);
    r.clear();
    assert_eq!(TRACKER.live_blocks(), 0);

    // exchange transfers ownership and frees the receiver's block once
    let frees_before = TRACKER.free_count();
    let mut s = AllocRange::new();
    r.resize(8);
    s.resize(32);
    let s_ptr = s.as_ptr();
    assert_eq!(TRACKER.live_blocks(), 2);

    r.exchange(&mut s);
    assert_eq!(r.len(), 32);
    assert_eq!(r.as_ptr(), s_ptr);
    assert!(s.is_empty());
    // exactly one free so far: the 8-byte block r gave up
    assert_eq!(TRACKER.free_count(), frees_before + 1);
    assert_eq!(TRACKER.live_blocks(), 1);

    r.clear();
    assert_eq!(TRACKER.live_blocks(), 0);

    // drop releases the block like clear does
    {
        let mut dropped = AllocRange::new();
        dropped.resize(10);
        assert_eq!(TRACKER.live_blocks(), 1);
    }
    assert_eq!(TRACKER.live_blocks(), 0);

    // resize to zero releases the block one way or another
    r.resize(24);
    r.resize(0);
    assert_eq!(r.len(), 0);
    r.clear();
    assert_eq!(TRACKER.live_blocks(), 0);

    // clear on an empty range frees nothing
    let frees_before = TRACKER.free_count();
    r.clear();
    assert_eq!(TRACKER.free_count(), frees_before);

    assert!(!TRACKER.has_leaks());
}
