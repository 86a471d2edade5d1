// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dynamic-buffer-count operator that batches stream items into chunks whose size
//! is controlled by a second stream.
//!
//! This module provides the [`dynamic_buffer_count`](DynamicBufferCountExt::dynamic_buffer_count)
//! operator, a variant of count-based windowing where the window length follows the
//! latest value of a size stream.
//!
//! # Overview
//!
//! Items are accumulated in a pending buffer. Once the buffer reaches the current
//! target size it is emitted as a `Vec` and a new buffer starts. Size updates change
//! the target on the fly:
//!
//! | Situation                      | Effect                                                        |
//! |--------------------------------|---------------------------------------------------------------|
//! | no size received yet           | items accumulate, nothing is emitted                          |
//! | first size                     | target set, pending items are **not** flushed                  |
//! | same size again                | ignored                                                       |
//! | larger size                    | target raised, nothing is emitted                             |
//! | smaller size, buffer longer    | every complete batch of the new size is emitted at once       |
//! | size `0`                       | each item is emitted as a single-element batch                |
//! | data stream completes          | complete batches, then the partial remainder, then completion |
//! | size stream completes          | the last size stays in effect                                 |
//! | error on either stream         | pending items dropped, error emitted, operator terminates     |
//!
//! # Basic Usage
//!
//! ```
//! use rebatch_stream::prelude::*;
//! use rebatch_test_utils::{test_channel, Sequenced};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, data) = test_channel::<Sequenced<i32>>();
//! let (size_tx, sizes) = test_channel::<Sequenced<usize>>();
//!
//! let mut batched = data.dynamic_buffer_count::<Sequenced<Vec<i32>>>(sizes);
//!
//! size_tx.unbounded_send(Sequenced::new(5)).unwrap();
//! for i in 1..=4 {
//!     tx.unbounded_send(Sequenced::new(i)).unwrap();
//! }
//!
//! // Shrinking below the pending length flushes [1, 2] and [3, 4] right away
//! size_tx.unbounded_send(Sequenced::new(2)).unwrap();
//!
//! let first = batched.next().await.unwrap().unwrap().into_inner();
//! let second = batched.next().await.unwrap().unwrap().into_inner();
//! assert_eq!(first, vec![1, 2]);
//! assert_eq!(second, vec![3, 4]);
//! # }
//! ```
//!
//! # Ordering
//!
//! The operator keeps a one-item look-ahead slot per input. When both slots are
//! filled the item with the smaller timestamp is applied first; a size update wins a
//! tie. Each item is fully applied (including any flush it triggers) before the next
//! one is considered.
//!
//! When the data stream ends, size updates already queued on the size stream are
//! still applied before the final partial batch is flushed.
//!
//! # Use Cases
//!
//! - **Adaptive batching**: Grow batches under load, shrink them when latency matters
//! - **Backpressure tuning**: Let a downstream consumer advertise how much it can take
//! - **Rate-controlled sinks**: Size database or network writes from a feedback loop
//!
//! # Error Handling
//!
//! An error from either input ends the operator. Pending items are discarded, the
//! error is emitted (size stream errors as
//! [`RebatchError::SizeStreamError`](rebatch_core::RebatchError::SizeStreamError)), the
//! size stream is released and the stream completes.
//!
//! # State
//!
//! The reconciliation rules live in [`BufferState`], which can be driven directly
//! without any stream when the inputs are already serialized.

mod implementation;
mod state;

pub use implementation::{DynamicBufferCount, DynamicBufferCountExt};
pub use state::{BufferState, SizeChange};
