// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::state::BufferState;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use rebatch_core::{Batchable, HasTimestamp, IntoStream, StreamItem, Timestamped};

/// Extension trait providing the [`dynamic_buffer_count`](Self::dynamic_buffer_count) operator.
///
/// Implemented for all streams of [`StreamItem<T>`] where `T` implements [`Batchable`].
/// `Z` is the timestamped size update (`Inner = usize`) and `SZ` anything that converts
/// into a stream of them.
pub trait DynamicBufferCountExt<T, Z, SZ>: Stream<Item = StreamItem<T>> + Sized
where
    T: Batchable,
    T::Inner: Clone + Debug + Unpin + 'static,
    Z: Timestamped<Inner = usize, Timestamp = T::Timestamp>,
    SZ: IntoStream<Item = StreamItem<Z>>,
{
    /// Groups items into batches whose target size is driven by `sizes`.
    ///
    /// # Type Parameters
    ///
    /// - `Out`: The output wrapper type (must implement `Timestamped` with `Inner = Vec<T::Inner>`)
    ///
    /// # Arguments
    ///
    /// * `sizes` - Stream of target batch sizes. Owned by the operator from now on and
    ///   dropped when the operator terminates.
    ///
    /// # Behavior
    ///
    /// - **Values**: Accumulated until the current size is reached, then emitted as `Vec<T::Inner>`
    /// - **No size yet**: Values accumulate without any emission
    /// - **First size**: Only sets the target, even when more items are already pending
    /// - **Equal size**: Ignored
    /// - **Growth**: Updates the target, never emits
    /// - **Shrink**: Emits every complete batch of the new size at once when the pending
    ///   buffer is longer than the new size
    /// - **Size `0`**: Every value leaves as a single-element batch
    /// - **Completion**: Emits complete batches, then the partial remainder, then completes
    /// - **Errors**: Drop the pending items, emit the error and terminate (size stream errors included)
    /// - **Timestamps**: Each batch carries the timestamp of its **last** item
    ///
    /// See the [module-level documentation](crate::dynamic_buffer_count) for examples.
    fn dynamic_buffer_count<Out>(self, sizes: SZ) -> DynamicBufferCount<Self, SZ::Stream, T, Z, Out>
    where
        Out: Timestamped<Inner = Vec<T::Inner>>,
        Out::Timestamp: From<T::Timestamp>;
}

impl<S, T, Z, SZ> DynamicBufferCountExt<T, Z, SZ> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Batchable,
    T::Inner: Clone + Debug + Unpin + 'static,
    Z: Timestamped<Inner = usize, Timestamp = T::Timestamp>,
    SZ: IntoStream<Item = StreamItem<Z>>,
{
    fn dynamic_buffer_count<Out>(self, sizes: SZ) -> DynamicBufferCount<Self, SZ::Stream, T, Z, Out>
    where
        Out: Timestamped<Inner = Vec<T::Inner>>,
        Out::Timestamp: From<T::Timestamp>,
    {
        DynamicBufferCount::new(self, sizes.into_stream())
    }
}

/// Stream returned by [`dynamic_buffer_count`](DynamicBufferCountExt::dynamic_buffer_count).
///
/// Polls both inputs into one-item look-ahead slots and reconciles them one at a time,
/// oldest timestamp first (size updates win ties). Once terminated it never polls either
/// input again.
#[pin_project]
pub struct DynamicBufferCount<S, SZ, T, Z, Out>
where
    S: Stream<Item = StreamItem<T>>,
    SZ: Stream<Item = StreamItem<Z>>,
{
    #[pin]
    source: S,
    #[pin]
    sizes: Option<SZ>,
    next_value: Option<T>,
    next_size: Option<Z>,
    state: BufferState<T>,
    source_ended: bool,
    terminated: bool,
    _out: PhantomData<fn() -> Out>,
}

impl<S, SZ, T, Z, Out> DynamicBufferCount<S, SZ, T, Z, Out>
where
    S: Stream<Item = StreamItem<T>>,
    SZ: Stream<Item = StreamItem<Z>>,
{
    fn new(source: S, sizes: SZ) -> Self {
        Self {
            source,
            sizes: Some(sizes),
            next_value: None,
            next_size: None,
            state: BufferState::new(),
            source_ended: false,
            terminated: false,
            _out: PhantomData,
        }
    }

    /// The target batch size currently in effect, `None` before the first size update.
    pub const fn current_size(&self) -> Option<usize> {
        self.state.current_size()
    }

    /// Number of items waiting for their batch to fill.
    pub fn pending_len(&self) -> usize {
        self.state.pending_len()
    }

    /// Returns `true` while the size stream is still owned by the operator.
    pub const fn is_tracking_sizes(&self) -> bool {
        self.sizes.is_some()
    }
}

impl<S, SZ, T, Z, Out> Debug for DynamicBufferCount<S, SZ, T, Z, Out>
where
    S: Stream<Item = StreamItem<T>>,
    SZ: Stream<Item = StreamItem<Z>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicBufferCount")
            .field("current_size", &self.state.current_size())
            .field("pending", &self.state.pending_len())
            .field("ready", &self.state.ready_len())
            .field("tracking_sizes", &self.sizes.is_some())
            .field("terminated", &self.terminated)
            .finish()
    }
}

/// Wraps a completed batch in the output type, stamped with its last item's timestamp.
fn into_output<T, Out>(batch: Vec<T>) -> Option<Out>
where
    T: Timestamped,
    Out: Timestamped<Inner = Vec<T::Inner>>,
    Out::Timestamp: From<T::Timestamp>,
{
    let timestamp = batch.last().map(|item| item.timestamp())?;
    let values = batch.into_iter().map(T::into_inner).collect();
    Some(Out::with_timestamp(values, timestamp.into()))
}

impl<S, SZ, T, Z, Out> Stream for DynamicBufferCount<S, SZ, T, Z, Out>
where
    S: Stream<Item = StreamItem<T>>,
    SZ: Stream<Item = StreamItem<Z>>,
    T: Batchable,
    T::Inner: Clone + Debug + Unpin + 'static,
    Z: Timestamped<Inner = usize, Timestamp = T::Timestamp>,
    Out: Timestamped<Inner = Vec<T::Inner>>,
    Out::Timestamp: From<T::Timestamp>,
{
    type Item = StreamItem<Out>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // Completed batches leave before anything else is looked at
            if let Some(batch) = this.state.next_batch() {
                if let Some(out) = into_output::<T, Out>(batch) {
                    return Poll::Ready(Some(StreamItem::Value(out)));
                }
                continue;
            }

            if *this.terminated {
                return Poll::Ready(None);
            }

            // Read after the source ended too: sizes queued ahead of completion still apply
            if this.next_size.is_none() {
                if let Some(sizes) = this.sizes.as_mut().as_pin_mut() {
                    match sizes.poll_next(cx) {
                        Poll::Ready(Some(StreamItem::Value(size))) => {
                            *this.next_size = Some(size);
                        }
                        Poll::Ready(Some(StreamItem::Error(err))) => {
                            error!("dynamic_buffer_count: size stream failed: {}", err);
                            let dropped = this.state.discard();
                            if dropped > 0 {
                                warn!(
                                    "dynamic_buffer_count: dropping {} pending items after size stream error",
                                    dropped
                                );
                            }
                            *this.next_value = None;
                            this.sizes.set(None);
                            *this.terminated = true;
                            return Poll::Ready(Some(StreamItem::Error(
                                err.into_size_stream_error(),
                            )));
                        }
                        Poll::Ready(None) => {
                            info!(
                                "dynamic_buffer_count: size stream completed, keeping size {:?}",
                                this.state.current_size()
                            );
                            this.sizes.set(None);
                        }
                        Poll::Pending => {}
                    }
                }
            }

            if this.next_value.is_none() && !*this.source_ended {
                match this.source.as_mut().poll_next(cx) {
                    Poll::Ready(Some(StreamItem::Value(value))) => {
                        *this.next_value = Some(value);
                    }
                    Poll::Ready(Some(StreamItem::Error(err))) => {
                        let dropped = this.state.discard();
                        if dropped > 0 {
                            warn!(
                                "dynamic_buffer_count: dropping {} pending items after source error",
                                dropped
                            );
                        }
                        *this.next_size = None;
                        this.sizes.set(None);
                        *this.terminated = true;
                        return Poll::Ready(Some(StreamItem::Error(err)));
                    }
                    Poll::Ready(None) => {
                        *this.source_ended = true;
                    }
                    Poll::Pending => {}
                }
            }

            match (this.next_value.take(), this.next_size.take()) {
                (Some(value), Some(size)) => {
                    if size.timestamp() <= value.timestamp() {
                        this.state.resize(size.into_inner());
                        *this.next_value = Some(value);
                    } else {
                        this.state.push(value);
                        *this.next_size = Some(size);
                    }
                }
                (Some(value), None) => this.state.push(value),
                (None, Some(size)) => {
                    this.state.resize(size.into_inner());
                }
                // Reached only once the size stream is exhausted, released or pending
                (None, None) if *this.source_ended => {
                    let pending = this.state.pending_len();
                    if this.state.current_size().is_none() && pending > 0 {
                        warn!(
                            "dynamic_buffer_count: source completed before any size arrived, dropping {} pending items",
                            pending
                        );
                    }
                    this.state.finish();
                    this.sizes.set(None);
                    *this.terminated = true;
                }
                (None, None) => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let ready = self.state.ready_len();
        if self.terminated {
            (ready, Some(ready))
        } else {
            (ready, None)
        }
    }
}

impl<S, SZ, T, Z, Out> FusedStream for DynamicBufferCount<S, SZ, T, Z, Out>
where
    S: Stream<Item = StreamItem<T>>,
    SZ: Stream<Item = StreamItem<Z>>,
    T: Batchable,
    T::Inner: Clone + Debug + Unpin + 'static,
    Z: Timestamped<Inner = usize, Timestamp = T::Timestamp>,
    Out: Timestamped<Inner = Vec<T::Inner>>,
    Out::Timestamp: From<T::Timestamp>,
{
    fn is_terminated(&self) -> bool {
        self.terminated && self.state.ready_len() == 0
    }
}
