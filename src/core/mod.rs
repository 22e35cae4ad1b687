//! Core module containing the fundamental types shared by tables and feeds

pub mod error;
pub mod field;
pub mod query;
pub mod record;

pub use error::{ConfigError, ExportError, InsightsError, Result, TableError, ValidationError};
pub use field::{FieldKind, FieldValue};
pub use query::{
    CategoryFilter, FilterSpec, PageInfo, PageSpec, SortDirection, SortSpec, StatusFilter,
};
pub use record::Record;
