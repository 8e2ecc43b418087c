//! Tests for the structured events emitted with the `tracing` feature.

#![cfg(feature = "tracing")]

use frozen_set::{EmptyFrozenSet, FrozenSet, Less};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the level of every event it sees.
#[derive(Clone, Default)]
struct RecordingLayer {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        self.levels
            .lock()
            .expect("recording lock poisoned")
            .push(*event.metadata().level());
    }
}

fn record<F: FnOnce()>(action: F) -> Vec<Level> {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, action);
    let levels = layer.levels.lock().expect("recording lock poisoned");
    levels.clone()
}

#[rstest]
fn test_construction_emits_trace_event() {
    let levels = record(|| {
        let _set = FrozenSet::new([3, 2, 1]);
        let _empty = EmptyFrozenSet::<i32>::try_from_iter(std::iter::empty(), Less);
    });
    assert_eq!(levels, vec![Level::TRACE, Level::TRACE]);
}

#[rstest]
fn test_empty_set_conversions_emit_trace_event() {
    let levels = record(|| {
        let _from_array: EmptyFrozenSet<i32> = EmptyFrozenSet::from([]);
        let _from_slice = EmptyFrozenSet::<i32>::try_from(&[][..]);
        let _from_vec = EmptyFrozenSet::<i32>::try_from(Vec::new());
    });
    assert_eq!(levels, vec![Level::TRACE, Level::TRACE, Level::TRACE]);
}

#[rstest]
fn test_endless_input_is_rejected_once() {
    let levels = record(|| {
        let _ = FrozenSet::<u8, 2>::try_from_iter(std::iter::repeat(0), Less);
        let _ = EmptyFrozenSet::<u8>::try_from_iter(std::iter::repeat(0), Less);
    });
    assert_eq!(levels, vec![Level::DEBUG, Level::DEBUG]);
}

#[rstest]
fn test_rejected_input_emits_debug_event() {
    let levels = record(|| {
        let _ = FrozenSet::<i32, 2>::try_from(vec![1, 2, 3]);
        let _ = FrozenSet::from_sorted([2, 1], Less);
    });
    assert_eq!(levels, vec![Level::DEBUG, Level::DEBUG]);
}

#[rstest]
fn test_lookups_are_silent() {
    let set = FrozenSet::new([1, 2, 3]);
    let levels = record(|| {
        let _ = set.count(&2);
        let _ = set.lower_bound(&5);
    });
    assert!(levels.is_empty());
}
