//! Live Metrics Example
//!
//! Drives the real-time widget from a seeded [`LiveFeed`] and keeps a
//! top-pages table in sync with every update. The feed is paused and
//! resumed half way through.

use anyhow::Result;
use insights::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let initial = RealtimeMetrics::default();
    let config = LiveConfig {
        interval_ms: 500,
        seed: Some(2024),
        ..LiveConfig::default()
    };

    let mut pages = TableEngine::new(initial.top_pages.clone());
    pages.apply_sort(SortSpec::descending("views"));

    let feed = LiveFeed::spawn(config, initial);
    let mut rx = feed.subscribe();
    println!("🔴 Live feed started");

    for _ in 0..6 {
        let update = rx.recv().await?;
        let m = &update.metrics;
        println!(
            "#{} {}  users {}  sessions {}  bounce {:.1}%",
            update.sequence,
            update.timestamp.format("%H:%M:%S%.3f"),
            format_compact(m.active_users),
            format_compact(m.sessions_today),
            m.bounce_rate
        );

        pages.set_dataset(m.top_pages.clone());
        for stat in pages.view().rows {
            println!("    {:<10} {:>6} views", stat.page, stat.views);
        }

        if update.sequence == 3 {
            feed.pause();
            tokio::time::sleep(std::time::Duration::from_millis(1200)).await;
            println!("⏸️  paused, latest users still {}", feed.latest().active_users);
            feed.resume();
        }
    }

    feed.stop();
    println!("⏹️  Live feed stopped");
    Ok(())
}
