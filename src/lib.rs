//! # Insights-RS
//!
//! Table engine and live metrics core for marketing-analytics dashboards.
//!
//! ## Features
//!
//! - **Table Engine**: Sort, filter, search and paginate in-memory records
//! - **Stable Sorting**: Equal keys keep their dataset order in both directions
//! - **Three-State Sort Cycle**: Ascending, descending, then a new column
//! - **Clamped Pagination**: Page requests never leave `[1, total_pages]`
//! - **CSV Export**: Every filtered row, regardless of the current page
//! - **Configuration-Based**: Column schema and export settings via YAML
//! - **Live Metrics**: Seeded random-walk snapshots broadcast on an interval
//!
//! ## Quick Start
//!
//! ```rust
//! use insights::prelude::*;
//!
//! let mut table = TableEngine::with_config(sample_campaigns(), TableConfig::default_config())?;
//!
//! table.set_sort("budget");
//! table.set_filter("Active");
//! table.set_page_size(2)?;
//!
//! let view = table.view();
//! assert_eq!(view.total_filtered(), 4);
//! assert_eq!(view.rows[0].name, "Product Launch");
//!
//! let csv = table.export_csv();
//! assert_eq!(csv.lines().count(), 5);
//! # Ok::<(), InsightsError>(())
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod live;
pub mod table;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, ExportError, InsightsError, TableError, ValidationError},
        field::{FieldKind, FieldValue},
        query::{
            CategoryFilter, FilterSpec, PageInfo, PageSpec, SortDirection, SortSpec, StatusFilter,
        },
        record::Record,
    };

    // === Config ===
    pub use crate::config::{ColumnConfig, ExportConfig, TableConfig};

    // === Table ===
    pub use crate::table::{
        TableEngine, TableView,
        export::{Escaping, ExportFile},
    };

    // === Live Metrics ===
    pub use crate::live::{
        MetricsTicker, PageStat, RealtimeMetrics,
        feed::{LiveConfig, LiveFeed, MetricsUpdate},
        format_compact,
    };

    // === Sample Data ===
    pub use crate::data::{
        Campaign, CampaignStatus, CampaignSummary, NewCampaign, Report, managed_campaigns,
        sample_campaigns, sample_reports,
    };

    // === External dependencies ===
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
