mod common;

use common::{stub_bridge, StubCommand};
use discord_bridge_api::*;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn populate_and_get() {
    let bridge = stub_bridge();
    let cache = CommandCache::new();
    let inserted = cache
        .populate(&[
            StubCommand::new(&bridge, "10", "ping", None),
            StubCommand::new(&bridge, "11", "echo", None),
        ])
        .await;

    assert_eq!(inserted, 2);
    assert_eq!(cache.len().await, 2);
    assert_eq!(cache.get(Snowflake::new(10)).await.unwrap().name(), "ping");
    assert!(cache.get(Snowflake::new(12)).await.is_none());
}

#[tokio::test]
async fn malformed_ids_are_skipped() {
    let bridge = stub_bridge();
    let cache = CommandCache::new();
    let inserted = cache
        .populate(&[
            StubCommand::new(&bridge, "oops", "broken", None),
            StubCommand::new(&bridge, "5", "fine", None),
        ])
        .await;
    assert_eq!(inserted, 1);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn later_population_wins() {
    let bridge = stub_bridge();
    let cache = CommandCache::new();
    cache.populate(&[StubCommand::new(&bridge, "1", "old", None)]).await;
    cache.populate(&[StubCommand::new(&bridge, "1", "new", None)]).await;
    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.get(Snowflake::new(1)).await.unwrap().name(), "new");
}

#[tokio::test]
async fn filters_by_server() {
    let bridge = stub_bridge();
    let server = Some(Snowflake::new(99));
    let cache = CommandCache::new();
    cache
        .populate(&[
            StubCommand::new(&bridge, "1", "global", None),
            StubCommand::new(&bridge, "2", "local", server),
        ])
        .await;

    let local: Vec<_> = cache.for_server(server).await.iter().map(|c| c.name()).collect();
    assert_eq!(local, vec!["local"]);
    assert_eq!(cache.for_server(None).await.len(), 1);
}

#[tokio::test]
async fn remove_and_clear() {
    let bridge = stub_bridge();
    let cache = CommandCache::new();
    cache
        .populate(&[
            StubCommand::new(&bridge, "1", "a", None),
            StubCommand::new(&bridge, "2", "b", None),
        ])
        .await;

    assert!(cache.remove(Snowflake::new(1)).await.is_some());
    assert!(cache.remove(Snowflake::new(1)).await.is_none());
    cache.clear().await;
    assert!(cache.is_empty().await);
}
