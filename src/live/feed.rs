//! Interval-driven broadcast of metric snapshots
//!
//! ```text
//! interval ──▶ MetricsTicker::tick() ──▶ broadcast channel ──▶ subscribers
//!                      │
//!                      └──▶ watch channel (latest snapshot)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let feed = LiveFeed::spawn(LiveConfig::default(), RealtimeMetrics::default());
//! let mut rx = feed.subscribe();
//!
//! while let Ok(update) = rx.recv().await {
//!     table.set_dataset(update.metrics.top_pages.clone());
//! }
//! ```

use super::{MetricsTicker, RealtimeMetrics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Settings for a [`LiveFeed`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Milliseconds between updates
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Fixed RNG seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Broadcast buffer size before slow subscribers lag
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_interval_ms() -> u64 {
    3000
}

fn default_capacity() -> usize {
    16
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            seed: None,
            capacity: default_capacity(),
        }
    }
}

impl LiveConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Envelope wrapping a snapshot with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsUpdate {
    /// Unique update ID
    pub id: Uuid,
    /// When the snapshot was produced
    pub timestamp: DateTime<Utc>,
    /// 1 for the first published update
    pub sequence: u64,
    pub metrics: RealtimeMetrics,
}

impl MetricsUpdate {
    pub fn new(sequence: u64, metrics: RealtimeMetrics) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sequence,
            metrics,
        }
    }
}

/// Background producer of [`MetricsUpdate`]s
///
/// While paused, interval ticks are skipped and nothing is published. The
/// task is aborted when the feed is dropped.
#[derive(Debug)]
pub struct LiveFeed {
    sender: broadcast::Sender<MetricsUpdate>,
    latest: watch::Receiver<RealtimeMetrics>,
    live: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl LiveFeed {
    /// Start the feed on the current tokio runtime
    pub fn spawn(config: LiveConfig, initial: RealtimeMetrics) -> Self {
        let (sender, _) = broadcast::channel(config.capacity.max(1));
        let (latest_tx, latest) = watch::channel(initial);
        let live = Arc::new(AtomicBool::new(true));

        let mut ticker = match config.seed {
            Some(seed) => MetricsTicker::new(seed),
            None => MetricsTicker::from_entropy(),
        };
        let period = config.interval();
        let task_sender = sender.clone();
        let task_live = Arc::clone(&live);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick completes immediately
            interval.tick().await;
            let mut sequence = 0u64;

            loop {
                interval.tick().await;
                if !task_live.load(Ordering::Acquire) {
                    continue;
                }

                let next = ticker.tick(&latest_tx.borrow());
                latest_tx.send_replace(next.clone());
                sequence += 1;

                // no subscribers is fine
                let receivers = task_sender
                    .send(MetricsUpdate::new(sequence, next))
                    .unwrap_or(0);
                tracing::trace!(sequence, receivers, "metrics update published");
            }
        });

        tracing::info!(
            interval_ms = config.interval_ms,
            seeded = config.seed.is_some(),
            "live feed started"
        );

        Self {
            sender,
            latest,
            live,
            handle,
        }
    }

    /// Receive all future updates
    pub fn subscribe(&self) -> broadcast::Receiver<MetricsUpdate> {
        self.sender.subscribe()
    }

    /// Most recent snapshot (the initial one before the first update)
    pub fn latest(&self) -> RealtimeMetrics {
        self.latest.borrow().clone()
    }

    pub fn pause(&self) {
        self.live.store(false, Ordering::Release);
        tracing::info!("live feed paused");
    }

    pub fn resume(&self) {
        self.live.store(true, Ordering::Release);
        tracing::info!("live feed resumed");
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Stop producing updates; subscribers see the channel close
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::info!("live feed stopped");
    }
}
