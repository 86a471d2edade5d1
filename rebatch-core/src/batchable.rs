// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Timestamped;
use core::fmt::Debug;

/// The standard bound for items flowing through a batching operator.
///
/// A `Batchable` item is:
/// - Timestamped (to interleave the data stream with its size-control stream)
/// - Movable (Unpin)
/// - Debuggable
/// - 'static (owned data)
///
/// Thread-safety is not part of the bound: an operator stream is `Send` exactly when
/// its inputs and items are, so the same operator serves multi-threaded and
/// single-threaded executors.
///
/// Items never need to be comparable among themselves: only their timestamps are
/// ordered.
///
/// This trait is implemented automatically for every type that satisfies the bounds.
pub trait Batchable: Timestamped + Clone + Unpin + 'static + Debug
where
    Self::Inner: Clone + Unpin + 'static + Debug,
{
}

impl<T> Batchable for T
where
    T: Timestamped + Clone + Unpin + 'static + Debug,
    T::Inner: Clone + Unpin + 'static + Debug,
{
}
