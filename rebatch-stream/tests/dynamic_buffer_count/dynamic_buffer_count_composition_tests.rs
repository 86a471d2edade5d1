// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `dynamic_buffer_count` combined with other stream operators.

use futures::{stream, StreamExt};
use rebatch_core::StreamItem;
use rebatch_stream::DynamicBufferCountExt;
use rebatch_test_utils::records::{record, records, Record};
use rebatch_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, unwrap_stream, unwrap_value,
    Sequenced,
};

#[tokio::test]
async fn test_batches_feed_downstream_map() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Sequenced<Record>>();
    let (size_tx, sizes) = test_channel::<Sequenced<usize>>();
    let mut result = stream
        .dynamic_buffer_count::<Sequenced<Vec<Record>>>(sizes)
        .map(|item| item.map(|batch| batch.value.len()));

    // Act
    size_tx.unbounded_send(Sequenced::new(3))?;
    for item in [record(1), record(2), record(3)] {
        tx.unbounded_send(Sequenced::new(item))?;
    }
    size_tx.unbounded_send(Sequenced::new(1))?;
    tx.unbounded_send(Sequenced::new(record(12)))?;

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 3);
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut result, 500).await)), 1);

    Ok(())
}

#[tokio::test]
async fn test_sizes_derived_from_another_stream() {
    // Arrange: a load signal mapped to batch sizes
    let load = stream::iter([1u64, 3]).map(|level| {
        StreamItem::Value(Sequenced::with_sequence(level as usize * 2, level))
    });
    let items = records(1..=8)
        .into_iter()
        .enumerate()
        .map(|(i, item)| StreamItem::Value(Sequenced::with_sequence(item, 2 * i as u64)));

    // Act
    let batches: Vec<usize> = stream::iter(items)
        .dynamic_buffer_count::<Sequenced<Vec<Record>>>(load)
        .map(|item| unwrap_value(Some(item)).value.len())
        .collect()
        .await;

    // Assert: size 2 is in effect from t=1, size 6 from t=3 on
    assert_eq!(batches, vec![2, 6]);
}

#[tokio::test]
async fn test_consumer_driven_resizing() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Sequenced<Record>>();
    let (size_tx, sizes) = test_channel::<Sequenced<usize>>();
    let mut result = stream.dynamic_buffer_count::<Sequenced<Vec<Record>>>(sizes);

    // Act & Assert: the consumer widens the batch after every delivery
    size_tx.unbounded_send(Sequenced::new(1))?;
    tx.unbounded_send(Sequenced::new(record(1)))?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await)).value;
    assert_eq!(first, vec![record(1)]);

    size_tx.unbounded_send(Sequenced::new(first.len() + 1))?;
    tx.unbounded_send(Sequenced::new(record(2)))?;
    assert_no_element_emitted(&mut result, 100).await;
    tx.unbounded_send(Sequenced::new(record(3)))?;
    let second = unwrap_value(Some(unwrap_stream(&mut result, 500).await)).value;
    assert_eq!(second, vec![record(2), record(3)]);

    size_tx.unbounded_send(Sequenced::new(second.len() + 1))?;
    for item in [record(4), record(6), record(10)] {
        tx.unbounded_send(Sequenced::new(item))?;
    }
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 500).await)).value,
        vec![record(4), record(6), record(10)]
    );

    drop(tx);
    assert_stream_ended(&mut result, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_dropping_operator_releases_size_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Sequenced<Record>>();
    let (size_tx, sizes) = test_channel::<Sequenced<usize>>();
    let mut result = stream.dynamic_buffer_count::<Sequenced<Vec<Record>>>(sizes);

    size_tx.unbounded_send(Sequenced::new(4))?;
    tx.unbounded_send(Sequenced::new(record(1)))?;
    assert_no_element_emitted(&mut result, 100).await;
    assert!(!size_tx.is_closed());

    // Act
    drop(result);

    // Assert: both inputs are gone, the partial batch with them
    assert!(size_tx.is_closed());
    assert!(tx.unbounded_send(Sequenced::new(record(2))).is_err());

    Ok(())
}

#[tokio::test]
async fn test_take_stops_before_completion() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Sequenced<Record>>();
    let (size_tx, sizes) = test_channel::<Sequenced<usize>>();
    let result = stream
        .dynamic_buffer_count::<Sequenced<Vec<Record>>>(sizes)
        .take(1);

    // Act
    size_tx.unbounded_send(Sequenced::new(2))?;
    for item in [record(1), record(2), record(3)] {
        tx.unbounded_send(Sequenced::new(item))?;
    }
    let batches: Vec<_> = result.map(|item| unwrap_value(Some(item)).value).collect().await;

    // Assert
    assert_eq!(batches, vec![vec![record(1), record(2)]]);

    Ok(())
}

#[tokio::test]
async fn test_batches_items_without_total_order() {
    // Arrange: f64 readings have no total order, only their sequence numbers are compared
    let sizes = stream::iter([StreamItem::Value(Sequenced::with_sequence(2usize, 0))]);
    let readings = stream::iter([0.5, f64::NAN, 2.25].into_iter().enumerate().map(
        |(i, reading)| StreamItem::Value(Sequenced::with_sequence(reading, i as u64 + 1)),
    ));

    // Act
    let batches: Vec<Vec<f64>> = readings
        .dynamic_buffer_count::<Sequenced<Vec<f64>>>(sizes)
        .map(|item| unwrap_value(Some(item)).value)
        .collect()
        .await;

    // Assert
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0][0], 0.5);
    assert!(batches[0][1].is_nan());
    assert_eq!(batches[1], vec![2.25]);
}
