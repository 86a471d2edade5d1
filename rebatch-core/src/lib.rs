// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by the rebatch crates.
//!
//! - [`StreamItem`] carries either a value or a [`RebatchError`] through a stream
//! - [`HasTimestamp`] / [`Timestamped`] give items the intrinsic ordering used to
//!   interleave a data stream with its size-control stream
//! - [`Batchable`] bundles the bounds every batched item must satisfy
//! - [`IntoStream`] lets operators accept anything convertible into a stream

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod batchable;
pub mod error;
pub mod into_stream;
pub mod stream_item;
pub mod timestamped;

pub use self::batchable::Batchable;
pub use self::error::RebatchError;
pub use self::into_stream::IntoStream;
pub use self::stream_item::StreamItem;
pub use self::timestamped::{HasTimestamp, Timestamped};
