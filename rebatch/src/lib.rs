// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rebatch
//!
//! Batch an async stream into `Vec`s whose length is steered by a second stream.
//!
//! ## Overview
//!
//! A fixed-size window forces one batch size for the lifetime of a pipeline. Rebatch
//! lets that size follow the system instead: a consumer that is falling behind can
//! ask for larger batches, one that needs low latency can ask for smaller ones, and
//! the data stream keeps flowing while the size changes.
//!
//! Both streams carry [`StreamItem`]s, so errors travel in-band next to values, and
//! timestamped items (see [`Timestamped`]), so the operator knows which of the two
//! happened first.
//!
//! ## Quick Start
//!
//! ```rust
//! use rebatch::prelude::*;
//! use rebatch_test_utils::{test_channel, Sequenced};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let (tx, data) = test_channel::<Sequenced<&str>>();
//! let (size_tx, sizes) = test_channel::<Sequenced<usize>>();
//! let mut batches = data.dynamic_buffer_count::<Sequenced<Vec<&str>>>(sizes);
//!
//! size_tx.unbounded_send(Sequenced::new(2))?;
//! for word in ["a", "b", "c"] {
//!     tx.unbounded_send(Sequenced::new(word))?;
//! }
//! drop(tx);
//!
//! assert_eq!(batches.next().await.unwrap().unwrap().into_inner(), vec!["a", "b"]);
//! assert_eq!(batches.next().await.unwrap().unwrap().into_inner(), vec!["c"]);
//! assert!(batches.next().await.is_none());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export core types
pub use rebatch_core::{Batchable, HasTimestamp, IntoStream, RebatchError, StreamItem, Timestamped};

// Re-export the operator
pub use rebatch_stream::{BufferState, DynamicBufferCount, DynamicBufferCountExt, SizeChange};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rebatch_stream::prelude::*;
}
