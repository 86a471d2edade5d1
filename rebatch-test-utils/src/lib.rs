// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rebatch crates.
//!
//! This crate provides helper types, test data structures and assertion helpers for
//! testing the batching operator. It is meant for development and tests only.
//!
//! # Key Types
//!
//! ## `Sequenced<T>`
//!
//! A wrapper that stamps test values with a global, monotonically increasing sequence
//! number. Values created in program order are therefore ordered the same way across
//! any number of channels, which is what lets a test interleave a data stream and a
//! size stream deterministically.
//!
//! ```rust
//! use rebatch_test_utils::Sequenced;
//! use rebatch_core::HasTimestamp;
//!
//! let first = Sequenced::new(42);
//! let second = Sequenced::new(7usize);
//! assert!(first.timestamp() < second.timestamp());
//! assert_eq!(first.value, 42);
//! ```
//!
//! ## Record Fixtures
//!
//! Numbered [`Record`](records::Record)s make batch boundaries easy to read:
//!
//! ```rust
//! use rebatch_test_utils::records::{ids, records};
//!
//! let batch = records(3..=5);
//! assert_eq!(ids(&batch), vec![3, 4, 5]);
//! ```
//!
//! # Module Organization
//!
//! - `sequenced` - `Sequenced<T>` wrapper and implementations
//! - `records` - `Record` fixtures and id helpers
//! - `helpers` - Assertion and utility functions
//! - `failing` - Sources that end in an error

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod failing;
pub mod helpers;
pub mod records;
pub mod sequenced;

use futures::channel::mpsc;
use futures::{Stream, StreamExt};
use rebatch_core::StreamItem;

// Re-export commonly used test utilities
pub use failing::fail_after;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use records::Record;
pub use sequenced::Sequenced;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use rebatch_test_utils::{test_channel, Sequenced};
/// use rebatch_test_utils::records::record;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// // Send plain values
/// tx.unbounded_send(Sequenced::new(record(1))).unwrap();
///
/// // Receive StreamItem-wrapped values
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded();
    let stream = rx.map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// # Example
///
/// ```rust
/// use rebatch_test_utils::test_channel_with_errors;
/// use rebatch_core::{RebatchError, StreamItem};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.unbounded_send(StreamItem::Value(42)).unwrap();
/// tx.unbounded_send(StreamItem::Error(RebatchError::stream_error("test error"))).unwrap();
///
/// let value = stream.next().await.unwrap();
/// let error = stream.next().await.unwrap();
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded();
    (tx, rx)
}
