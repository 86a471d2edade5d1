// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RebatchError;
use core::cmp::Ordering;
use core::fmt::Debug;

/// A stream item that can be either a value or an error.
///
/// Operators forward errors through the stream next to values, following Rx-style
/// semantics: for the batching operator an error terminates the sequence.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    /// A successful value
    Value(T),
    /// An error that terminates the stream
    Error(RebatchError),
}

impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T: Eq> Eq for StreamItem<T> {}

impl<T: PartialOrd> PartialOrd for StreamItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a.partial_cmp(b),
            (StreamItem::Error(_), StreamItem::Error(_)) => Some(Ordering::Equal),
            (StreamItem::Error(_), StreamItem::Value(_)) => Some(Ordering::Less),
            (StreamItem::Value(_), StreamItem::Error(_)) => Some(Ordering::Greater),
        }
    }
}

impl<T: Ord> Ord for StreamItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a.cmp(b),
            (StreamItem::Error(_), StreamItem::Error(_)) => Ordering::Equal,
            (StreamItem::Error(_), StreamItem::Value(_)) => Ordering::Less,
            (StreamItem::Value(_), StreamItem::Error(_)) => Ordering::Greater,
        }
    }
}

impl<T> StreamItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts from `StreamItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts from `StreamItem<T>` to `Option<RebatchError>`, discarding values.
    pub fn err(self) -> Option<RebatchError> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Maps a `StreamItem<T>` to `StreamItem<U>` by applying a function to the contained value.
    ///
    /// Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Maps the contained error, leaving values untouched.
    pub fn map_err<F>(self, f: F) -> StreamItem<T>
    where
        F: FnOnce(RebatchError) -> RebatchError,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(v),
            StreamItem::Error(e) => StreamItem::Error(f(e)),
        }
    }

    /// Chains a computation that can itself produce an error item.
    pub fn and_then<U, F>(self, f: F) -> StreamItem<U>
    where
        F: FnOnce(T) -> StreamItem<U>,
    {
        match self {
            StreamItem::Value(v) => f(v),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }

    /// Returns the contained value, panicking with a custom message if it's an error.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the item is an `Error`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => panic!("{msg}: {e:?}"),
        }
    }
}

impl<T> From<Result<T, RebatchError>> for StreamItem<T> {
    fn from(result: Result<T, RebatchError>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

impl<T> From<StreamItem<T>> for Result<T, RebatchError> {
    fn from(item: StreamItem<T>) -> Self {
        match item {
            StreamItem::Value(v) => Ok(v),
            StreamItem::Error(e) => Err(e),
        }
    }
}
