// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;

/// A trait for types that have a timestamp value.
///
/// The batching operator reads timestamps to decide which of its two inputs
/// (data items or size updates) happened first when both have an item ready.
///
/// # Examples
///
/// ```
/// use rebatch_core::HasTimestamp;
///
/// #[derive(Clone, Debug)]
/// struct Reading {
///     celsius: f32,
///     at: u64,
/// }
///
/// impl HasTimestamp for Reading {
///     type Timestamp = u64;
///
///     fn timestamp(&self) -> u64 {
///         self.at
///     }
/// }
/// ```
pub trait HasTimestamp {
    /// The type representing the timestamp
    type Timestamp: Ord + Copy + Send + Sync + Debug;

    /// Returns the timestamp value for this item.
    fn timestamp(&self) -> Self::Timestamp;
}

/// A timestamped wrapper that can be taken apart and rebuilt.
///
/// Emitted batches are constructed through [`with_timestamp`](Self::with_timestamp):
/// the batch wraps the inner values of its elements and carries the timestamp of
/// its last element.
///
/// # Type Parameters
/// * `Inner` - The type of the value wrapped by this timestamped type
///
/// # Examples
///
/// ```
/// use rebatch_core::{HasTimestamp, Timestamped};
///
/// #[derive(Clone, Debug)]
/// struct SequenceNumbered<T> {
///     value: T,
///     seq: u64,
/// }
///
/// impl<T: Clone> HasTimestamp for SequenceNumbered<T> {
///     type Timestamp = u64;
///     fn timestamp(&self) -> u64 { self.seq }
/// }
///
/// impl<T: Clone> Timestamped for SequenceNumbered<T> {
///     type Inner = T;
///
///     fn with_timestamp(value: T, seq: u64) -> Self { Self { value, seq } }
///     fn with_fresh_timestamp(value: T) -> Self {
///         // Use an atomic counter in production
///         Self { value, seq: 0 }
///     }
///     fn into_inner(self) -> T { self.value }
/// }
///
/// let batch = SequenceNumbered::with_timestamp(vec![1, 2, 3], 42);
/// assert_eq!(batch.timestamp(), 42);
/// assert_eq!(batch.into_inner(), vec![1, 2, 3]);
/// ```
pub trait Timestamped: HasTimestamp + Clone {
    /// The type of the inner value wrapped by this timestamped type
    type Inner: Clone;

    /// Creates a new instance wrapping the given value with the specified timestamp.
    fn with_timestamp(value: Self::Inner, timestamp: Self::Timestamp) -> Self;

    /// Creates a new instance wrapping the given value with a fresh timestamp.
    fn with_fresh_timestamp(value: Self::Inner) -> Self;

    /// Consumes self and returns the inner value.
    fn into_inner(self) -> Self::Inner;
}
