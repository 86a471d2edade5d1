// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources that fail part-way through.

use futures::stream::{self, Stream, StreamExt};
use rebatch_core::{RebatchError, StreamItem};

/// Emits the first `count` items of `inner` as values, then `error`, then ends.
///
/// ```rust
/// use rebatch_core::{RebatchError, StreamItem};
/// use rebatch_test_utils::fail_after;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let source = fail_after(stream::iter(1..=5), 2, RebatchError::stream_error("disk full"));
/// let items: Vec<_> = source.collect().await;
///
/// assert_eq!(items.len(), 3);
/// assert!(items[2].is_error());
/// # }
/// ```
pub fn fail_after<S>(
    inner: S,
    count: usize,
    error: RebatchError,
) -> impl Stream<Item = StreamItem<S::Item>> + Unpin
where
    S: Stream + Unpin,
{
    inner
        .take(count)
        .map(StreamItem::Value)
        .chain(stream::iter([StreamItem::Error(error)]))
}
