// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rebatch streams
//!
//! Batching itself never fails: slicing and appending in memory has no failure mode.
//! Every [`RebatchError`] therefore originates upstream, either in the data stream or in
//! the size-control stream, and travels downstream inside
//! [`StreamItem::Error`](crate::StreamItem::Error).
//!
//! # Examples
//!
//! ```
//! use rebatch_core::RebatchError;
//!
//! let upstream = RebatchError::stream_error("sensor offline");
//! let relabelled = upstream.into_size_stream_error();
//!
//! assert!(matches!(relabelled, RebatchError::SizeStreamError { .. }));
//! ```

use alloc::format;
use alloc::string::String;

/// Root error type for all rebatch operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RebatchError {
    /// Stream processing encountered an error
    ///
    /// General upstream failure of the data stream.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// The size-control stream failed
    ///
    /// A failing size stream terminates the batching operator; the upstream
    /// message is preserved in `context`.
    #[error("Size stream error: {context}")]
    SizeStreamError {
        /// Description of the size stream failure
        context: String,
    },
}

impl RebatchError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a size stream error with the given context
    pub fn size_stream_error(context: impl Into<String>) -> Self {
        Self::SizeStreamError {
            context: context.into(),
        }
    }

    /// Re-labels an error that came out of the size-control stream.
    ///
    /// An error that is already a [`RebatchError::SizeStreamError`] is returned unchanged.
    #[must_use]
    pub fn into_size_stream_error(self) -> Self {
        match self {
            Self::SizeStreamError { .. } => self,
            other => Self::SizeStreamError {
                context: format!("{other}"),
            },
        }
    }
}
