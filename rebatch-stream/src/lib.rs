// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Count-based batching driven by a live size stream.
//!
//! The single operator in this crate, [`dynamic_buffer_count`](DynamicBufferCountExt::dynamic_buffer_count),
//! groups the items of a data stream into `Vec` batches. Unlike a fixed-size window,
//! the target batch size comes from a second stream and may change at any time while
//! the data keeps flowing.
//!
//! # Two Inputs, One Order
//!
//! Both inputs carry timestamped items (see [`HasTimestamp`]). Whenever both have an
//! item available the operator applies the older one first, and a size update wins a
//! timestamp tie against a data item. Items that arrive alone are applied as soon as
//! they are polled. Every item is handled to completion before the next one is looked
//! at, so batch boundaries never depend on scheduling.
//!
//! # Example
//!
//! ```
//! use rebatch_stream::prelude::*;
//! use rebatch_test_utils::Sequenced;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let data = stream::iter((1..=5).map(|i| StreamItem::Value(Sequenced::with_timestamp(i, i as u64 + 10))));
//! let sizes = stream::iter([StreamItem::Value(Sequenced::with_timestamp(2usize, 0))]);
//!
//! let batches: Vec<Vec<i32>> = data
//!     .dynamic_buffer_count::<Sequenced<Vec<i32>>>(sizes)
//!     .map(|item| item.unwrap().into_inner())
//!     .collect()
//!     .await;
//!
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! # }
//! ```
//!
//! # Features
//!
//! - `std` (default): standard library support, logging through `eprintln!`/`println!`
//! - `alloc`: `no_std` builds on top of `alloc`
//! - `tracing`: route diagnostics through the [`tracing`](https://docs.rs/tracing) crate

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

#[macro_use]
mod logging;
pub mod dynamic_buffer_count;
pub mod prelude;

pub use dynamic_buffer_count::{BufferState, DynamicBufferCount, DynamicBufferCountExt, SizeChange};
pub use rebatch_core::{Batchable, HasTimestamp, IntoStream, RebatchError, StreamItem, Timestamped};
