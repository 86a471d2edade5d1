// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use rebatch_core::StreamItem;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` stays silent for `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _state = stream.next() => {
            panic!(
                "Unexpected element emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Asserts that `stream` completes within `timeout_ms` milliseconds without emitting.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: std::fmt::Debug,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(item)) => panic!("Expected stream to end, got {item:?}"),
        Err(_) => panic!("Stream did not end within {timeout_ms}ms"),
    }
}

/// Waits up to `timeout_ms` milliseconds for the next item and returns it.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended, expected an item"),
        Err(_) => panic!("No item emitted within {timeout_ms}ms"),
    }
}

/// Extracts the value of a `StreamItem`, panicking on errors and on `None`.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected a value, got error: {e}"),
        None => panic!("Expected a value, got nothing"),
    }
}
