// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the operator trait and the core item types.
//!
//! ```
//! use rebatch_stream::prelude::*;
//! ```
//!
//! # Contents
//!
//! - [`DynamicBufferCountExt`] - Batch items by a size driven from a second stream
//! - [`StreamItem`] - Value-or-error item carried by every stream
//! - [`RebatchError`] - Errors travelling inside [`StreamItem::Error`]
//! - [`HasTimestamp`] / [`Timestamped`] - Ordering and rebuilding of timestamped items
//! - [`IntoStream`] - Conversion of size sources into streams

pub use crate::dynamic_buffer_count::DynamicBufferCountExt;
pub use rebatch_core::{Batchable, HasTimestamp, IntoStream, RebatchError, StreamItem, Timestamped};
