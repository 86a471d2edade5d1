// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reconciliation state shared by the data input and the size input.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem::{replace, take};

/// How a size update changed the target batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChange {
    /// First size ever received. The pending buffer is not inspected.
    Initialized(usize),
    /// Same value as the current size; nothing happened.
    Unchanged,
    /// Larger target; accumulation continues toward it.
    Grew { from: usize, to: usize },
    /// Smaller target; full batches may have been flushed immediately.
    Shrank { from: usize, to: usize },
}

impl SizeChange {
    /// Returns `true` for [`SizeChange::Shrank`].
    #[must_use]
    pub const fn is_shrink(&self) -> bool {
        matches!(self, Self::Shrank { .. })
    }
}

/// Pending buffer, current target size and completed batches awaiting delivery.
///
/// Every mutation goes through `&mut self`, so whoever owns the state serializes
/// data items and size updates by construction.
///
/// A size of `0` behaves like `1`: each item leaves as a single-element batch and
/// an empty batch is never produced.
///
/// ```
/// use rebatch_stream::dynamic_buffer_count::{BufferState, SizeChange};
///
/// let mut state = BufferState::new();
/// state.resize(5);
/// for i in 1..=4 {
///     state.push(i);
/// }
///
/// assert_eq!(state.resize(2), SizeChange::Shrank { from: 5, to: 2 });
/// assert_eq!(state.next_batch(), Some(vec![1, 2]));
/// assert_eq!(state.next_batch(), Some(vec![3, 4]));
/// assert_eq!(state.pending_len(), 0);
/// ```
#[derive(Debug)]
pub struct BufferState<T> {
    buffer: Vec<T>,
    current_size: Option<usize>,
    ready: VecDeque<Vec<T>>,
}

impl<T> Default for BufferState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BufferState<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            current_size: None,
            ready: VecDeque::new(),
        }
    }

    /// The most recent target size, `None` until the first size update.
    #[must_use]
    pub const fn current_size(&self) -> Option<usize> {
        self.current_size
    }

    /// Number of items accumulated toward the next batch.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of completed batches not yet taken with [`next_batch`](Self::next_batch).
    #[must_use]
    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    /// Applies a size update.
    ///
    /// The first size only initializes the target, even if more items than that are
    /// already pending. A later, smaller size flushes right away when the pending
    /// buffer is longer than the new size; growth never flushes.
    pub fn resize(&mut self, size: usize) -> SizeChange {
        let change = match self.current_size {
            Some(current) if current == size => return SizeChange::Unchanged,
            None => {
                self.current_size = Some(size);
                return SizeChange::Initialized(size);
            }
            Some(current) if size < current => SizeChange::Shrank {
                from: current,
                to: size,
            },
            Some(current) => SizeChange::Grew {
                from: current,
                to: size,
            },
        };

        self.current_size = Some(size);

        if change.is_shrink() && self.buffer.len() > size {
            self.flush();
        }

        change
    }

    /// Appends an item and flushes once the target size is reached.
    pub fn push(&mut self, value: T) {
        self.buffer.push(value);

        if let Some(size) = self.current_size {
            if self.buffer.len() >= size {
                self.flush();
            }
        }
    }

    /// Moves every complete batch from the pending buffer to the ready queue.
    ///
    /// Batches are cut oldest first, each exactly one target size long. Afterwards
    /// fewer than a batch's worth of items remain pending. Returns the number of
    /// batches produced; without a target size nothing is flushed.
    pub fn flush(&mut self) -> usize {
        let Some(size) = self.current_size else {
            return 0;
        };

        let batch_len = size.max(1);
        let complete = self.buffer.len() / batch_len;
        if complete == 0 {
            return 0;
        }

        let remainder = self.buffer.split_off(complete * batch_len);
        let mut drained = replace(&mut self.buffer, remainder).into_iter();
        for _ in 0..complete {
            self.ready
                .push_back(drained.by_ref().take(batch_len).collect());
        }

        complete
    }

    /// Final flush on completion of the data input.
    ///
    /// Complete batches are cut as usual, then the leftover items form one last,
    /// shorter batch. With no target size ever received the pending items are
    /// dropped instead. Returns the number of batches produced.
    pub fn finish(&mut self) -> usize {
        if self.current_size.is_none() {
            self.discard();
            return 0;
        }

        let mut produced = self.flush();
        if !self.buffer.is_empty() {
            self.ready.push_back(take(&mut self.buffer));
            produced += 1;
        }

        produced
    }

    /// Drops the pending items, returning how many there were.
    pub fn discard(&mut self) -> usize {
        let dropped = self.buffer.len();
        self.buffer.clear();
        dropped
    }

    /// Takes the oldest completed batch.
    pub fn next_batch(&mut self) -> Option<Vec<T>> {
        self.ready.pop_front()
    }
}
