//! Integration tests for the live metrics ticker and feed

use insights::prelude::*;
use std::time::Duration;

#[test]
fn test_seeded_walk_is_reproducible() {
    let walk = |seed: u64| {
        let mut ticker = MetricsTicker::new(seed);
        let mut current = RealtimeMetrics::default();
        let mut users = Vec::new();
        for _ in 0..10 {
            current = ticker.tick(&current);
            users.push(current.active_users);
        }
        users
    };

    assert_eq!(walk(11), walk(11));
    assert_ne!(walk(11), walk(12));
}

#[test]
fn test_tick_preserves_previous_snapshot() {
    let previous = RealtimeMetrics::default();
    let mut ticker = MetricsTicker::new(4);
    let next = ticker.tick(&previous);

    assert_eq!(previous, RealtimeMetrics::default());
    assert!(next.sessions_today >= previous.sessions_today);
    assert_eq!(next.top_pages, previous.top_pages);
}

#[test]
fn test_top_pages_table() {
    let mut pages = TableEngine::new(RealtimeMetrics::default().top_pages);
    pages.apply_sort(SortSpec::descending("bounce_rate"));

    let view = pages.view();
    assert_eq!(view.rows[0].page, "/about");
    assert_eq!(view.total_filtered(), 5);

    pages.set_search("prod");
    assert_eq!(pages.view().rows[0].page, "/products");
}

#[tokio::test(start_paused = true)]
async fn test_feed_replaces_table_dataset() {
    let feed = LiveFeed::spawn(
        LiveConfig {
            interval_ms: 1000,
            seed: Some(77),
            capacity: 4,
        },
        RealtimeMetrics::default(),
    );
    let mut rx = feed.subscribe();

    let mut pages = TableEngine::new(Vec::<PageStat>::new());
    pages.goto_page(3);

    let update = rx.recv().await.unwrap();
    pages.set_dataset(update.metrics.top_pages.clone());

    assert_eq!(pages.view().total_filtered(), 5);
    assert_eq!(pages.view().current_page(), 1);
    assert_eq!(feed.latest(), update.metrics);
}

#[tokio::test(start_paused = true)]
async fn test_updates_arrive_on_interval() {
    let feed = LiveFeed::spawn(
        LiveConfig {
            interval_ms: 3000,
            seed: Some(1),
            capacity: 4,
        },
        RealtimeMetrics::default(),
    );
    let mut rx = feed.subscribe();

    let early = tokio::time::timeout(Duration::from_millis(2900), rx.recv()).await;
    assert!(early.is_err());

    let update = rx.recv().await.unwrap();
    assert_eq!(update.sequence, 1);
}

#[test]
fn test_update_envelope_serializes() {
    let update = MetricsUpdate::new(3, RealtimeMetrics::default());
    let json = serde_json::to_value(&update).unwrap();

    assert_eq!(json["sequence"], 3);
    assert_eq!(json["metrics"]["active_users"], 12847);
    assert!(json["id"].is_string());
}
