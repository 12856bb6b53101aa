use async_stream::try_stream;
use pretty_assertions::assert_eq;
use rowcast::{
    err, map_rows, map_stream, map_stream2, row, FromRow, MappedStream, Row, RowStream,
};
use tokio_stream::StreamExt;

#[derive(Debug, Default, PartialEq, FromRow)]
struct Event {
    event_id: i64,
    kind: String,
}

fn rows(n: i64) -> Vec<Row> {
    (1..=n)
        .map(|id| row!["event_id" => id, "kind" => format!("kind{id}")])
        .collect()
}

#[tokio::test]
async fn stream_and_sync_mapping_agree() {
    let sync: Vec<Event> = map_rows(rows(10)).unwrap().collect::<Result<_, _>>().unwrap();

    let streamed: Vec<Event> = map_stream::<Event>(RowStream::from_vec(rows(10)))
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(sync, streamed);
}

#[tokio::test]
async fn maps_rows_from_a_live_stream() {
    let source = RowStream::from_stream(try_stream! {
        for id in 1..=3_i64 {
            yield row!["event_id" => id, "kind" => "live"];
        }
    });

    let mut events = map_stream::<Event>(source).unwrap();
    let mut seen = Vec::new();

    while let Some(event) = events.next().await {
        seen.push(event.unwrap().event_id);
    }

    assert_eq!(seen, vec![1, 2, 3]);
}

#[tokio::test]
async fn source_errors_pass_through_unmapped() {
    let source = RowStream::from_iter(
        vec![
            Ok(row!["event_id" => 1_i64, "kind" => "ok"]),
            Err(err!("connection reset")),
        ]
        .into_iter(),
    );

    let mut events = map_stream::<Event>(source).unwrap();

    assert!(events.next().await.unwrap().is_ok());
    let err = events.next().await.unwrap().unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
    assert!(events.next().await.is_none());
}

#[tokio::test]
async fn multi_component_streams() {
    let source = RowStream::from_vec(vec![row!["id" => 1_i64, "name" => "a"]]);

    let pairs: Vec<(i64, String)> = map_stream2(source).unwrap().collect().await.unwrap();

    assert_eq!(pairs, vec![(1, "a".to_string())]);
}

#[tokio::test]
async fn mixed_components_fail_before_pulling_rows() {
    let source = RowStream::from_vec(rows(1));

    let err = map_stream2::<i64, Event>(source).unwrap_err();
    assert!(err.is_multiple_mappings());
}

#[tokio::test]
async fn mapped_stream_is_a_stream() {
    let events = map_stream::<Event>(RowStream::from_vec(rows(3))).unwrap();

    let ids: Vec<_> = StreamExt::map(events, |res| res.unwrap().event_id)
        .collect::<Vec<_>>()
        .await;

    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn ad_hoc_stream_strategy() {
    let source = RowStream::from_vec(vec![
        row!["a" => 2_i64, "b" => 3_i64],
        row!["a" => 4_i64, "b" => 5_i64],
    ]);

    let products: Vec<i64> = MappedStream::with(source, |row| {
        let mut values = row.into_values();
        let a: i64 = rowcast::FromValue::from_value(values.next().unwrap_or_default())?;
        let b: i64 = rowcast::FromValue::from_value(values.next().unwrap_or_default())?;
        Ok(a * b)
    })
    .collect()
    .await
    .unwrap();

    assert_eq!(products, vec![6, 20]);
}
