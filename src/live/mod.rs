//! Simulated real-time dashboard metrics
//!
//! [`MetricsTicker::tick`] derives the next snapshot from the previous one by
//! applying bounded random deltas. The ticker owns a seeded RNG so a given
//! seed always produces the same sequence. [`feed::LiveFeed`] drives a ticker
//! on an interval and broadcasts each snapshot.

pub mod feed;

use crate::core::{FieldValue, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Change applied to active users per tick
pub const ACTIVE_USERS_DELTA: Range<i64> = -100..100;

/// Sessions added per tick
pub const SESSIONS_DELTA: Range<i64> = 0..50;

/// Change applied to the bounce rate per tick, in percentage points
pub const BOUNCE_RATE_DELTA: Range<f64> = -2.0..2.0;

/// Bounce rate is kept within these bounds
pub const BOUNCE_RATE_MIN: f64 = 20.0;
pub const BOUNCE_RATE_MAX: f64 = 80.0;

/// Traffic for one site page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageStat {
    pub page: String,
    pub views: i64,
    pub bounce_rate: f64,
}

impl PageStat {
    pub fn new(page: impl Into<String>, views: i64, bounce_rate: f64) -> Self {
        Self {
            page: page.into(),
            views,
            bounce_rate,
        }
    }
}

impl Record for PageStat {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "page" => Some(FieldValue::from(self.page.as_str())),
            "views" => Some(FieldValue::Integer(self.views)),
            "bounce_rate" => Some(FieldValue::Float(self.bounce_rate)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        None
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.page]
    }
}

/// One snapshot of the real-time widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeMetrics {
    pub active_users: i64,
    pub sessions_today: i64,
    pub bounce_rate: f64,
    pub avg_session_duration: String,
    pub top_pages: Vec<PageStat>,
}

impl Default for RealtimeMetrics {
    fn default() -> Self {
        Self {
            active_users: 12847,
            sessions_today: 34520,
            bounce_rate: 42.3,
            avg_session_duration: "2m 34s".to_string(),
            top_pages: vec![
                PageStat::new("/", 8950, 38.2),
                PageStat::new("/products", 6780, 45.1),
                PageStat::new("/about", 4320, 52.8),
                PageStat::new("/contact", 2890, 48.5),
                PageStat::new("/blog", 2450, 35.7),
            ],
        }
    }
}

/// Seeded generator of metric updates
#[derive(Debug, Clone)]
pub struct MetricsTicker {
    rng: StdRng,
}

impl MetricsTicker {
    /// Ticker with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Ticker seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Next snapshot derived from `previous`
    ///
    /// Active users move by [`ACTIVE_USERS_DELTA`] and never drop below zero,
    /// sessions grow by [`SESSIONS_DELTA`] and the bounce rate moves by
    /// [`BOUNCE_RATE_DELTA`] within `[BOUNCE_RATE_MIN, BOUNCE_RATE_MAX]`.
    /// Other fields are carried over.
    pub fn tick(&mut self, previous: &RealtimeMetrics) -> RealtimeMetrics {
        let users_delta = self.rng.gen_range(ACTIVE_USERS_DELTA);
        let sessions_delta = self.rng.gen_range(SESSIONS_DELTA);
        let bounce_delta = self.rng.gen_range(BOUNCE_RATE_DELTA);

        RealtimeMetrics {
            active_users: previous.active_users.saturating_add(users_delta).max(0),
            sessions_today: previous.sessions_today.saturating_add(sessions_delta),
            bounce_rate: (previous.bounce_rate + bounce_delta)
                .clamp(BOUNCE_RATE_MIN, BOUNCE_RATE_MAX),
            ..previous.clone()
        }
    }
}

/// Compact number format used by the widget (`12.8K`, `1.2M`)
pub fn format_compact(n: i64) -> String {
    let abs = n.unsigned_abs() as f64;
    if abs >= 1_000_000.0 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
