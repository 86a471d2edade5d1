// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Write-batch fixtures.
//!
//! A [`Record`] is numbered by `id`, so checking that a batch kept its items in
//! order and at the right length is a matter of reading the ids.

use std::ops::RangeInclusive;

/// A keyed payload as it would sit in a write batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: u32,
    pub key: String,
}

/// Record number `id`, keyed `key-<id>`.
pub fn record(id: u32) -> Record {
    Record {
        id,
        key: format!("key-{id}"),
    }
}

/// Records for every id in `ids`, in order.
pub fn records(ids: RangeInclusive<u32>) -> Vec<Record> {
    ids.map(record).collect()
}

/// The ids of a batch, for compact assertions.
pub fn ids(batch: &[Record]) -> Vec<u32> {
    batch.iter().map(|r| r.id).collect()
}
