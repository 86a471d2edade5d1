// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;

/// A trait for types that can be converted into a `Stream`.
///
/// Operators taking a secondary input (such as the size-control stream of
/// `dynamic_buffer_count`) accept `IntoStream` so callers can hand over anything
/// stream-like without converting it first.
pub trait IntoStream {
    /// The type of items in the stream.
    type Item;
    /// The stream type that this object can be converted into.
    type Stream: Stream<Item = Self::Item>;

    /// Converts this object into a stream.
    fn into_stream(self) -> Self::Stream;
}

impl<S> IntoStream for S
where
    S: Stream,
{
    type Item = S::Item;
    type Stream = S;

    fn into_stream(self) -> Self::Stream {
        self
    }
}
