//! Client-side table engine
//!
//! [`TableEngine`] owns a dataset together with a sort, a filter and a page
//! specification, and derives the visible [`TableView`] from them on demand.
//!
//! # Example
//!
//! ```rust
//! use insights::prelude::*;
//!
//! let mut table = TableEngine::with_config(sample_campaigns(), TableConfig::default_config())
//!     .unwrap();
//!
//! table.set_filter("Active");
//! table.set_page_size(3).unwrap();
//! table.goto_page(2);
//!
//! let view = table.view();
//! assert_eq!(view.total_filtered(), 4);
//! assert_eq!(view.total_pages(), 2);
//! assert_eq!(view.rows.len(), 1);
//! ```

pub mod export;
pub mod pipeline;

use crate::config::TableConfig;
use crate::core::{
    CategoryFilter, FilterSpec, PageInfo, PageSpec, Record, Result, SortSpec, StatusFilter,
    TableError,
};
use export::ExportFile;
use serde::Serialize;

/// The derived, currently visible slice of a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView<R> {
    /// Rows on the current page
    pub rows: Vec<R>,

    /// Pagination metadata
    pub pagination: PageInfo,
}

impl<R> TableView<R> {
    /// Rows passing the filter, across all pages
    pub fn total_filtered(&self) -> usize {
        self.pagination.total
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.pagination.page
    }
}

/// Sort / filter / paginate engine over an in-memory dataset
///
/// The engine is single-threaded: every operation fully applies before it
/// returns, and [`TableEngine::view`] only reads state.
#[derive(Debug, Clone)]
pub struct TableEngine<R: Record> {
    dataset: Vec<R>,
    sort: SortSpec,
    filter: FilterSpec,
    page: PageSpec,
    config: TableConfig,
}

impl<R: Record> TableEngine<R> {
    /// Create an engine without column declarations
    ///
    /// Sort keys are then compared by their raw [`FieldValue`](crate::core::FieldValue) order.
    pub fn new(dataset: Vec<R>) -> Self {
        Self {
            dataset,
            sort: SortSpec::unsorted(),
            filter: FilterSpec::default(),
            page: PageSpec::default(),
            config: TableConfig::empty("table"),
        }
    }

    /// Create an engine using a validated table configuration
    pub fn with_config(dataset: Vec<R>, config: TableConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            table = %config.name,
            rows = dataset.len(),
            page_size = config.page_size,
            "table engine created"
        );

        Ok(Self {
            dataset,
            sort: SortSpec::unsorted(),
            filter: FilterSpec::default(),
            page: PageSpec {
                page_size: config.page_size,
                current_page: 1,
            },
            config,
        })
    }

    // === State accessors ===

    pub fn dataset(&self) -> &[R] {
        &self.dataset
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn page(&self) -> &PageSpec {
        &self.page
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    // === Mutations ===

    /// Sort on `key`
    ///
    /// Re-selecting the current key flips the direction; any other key starts
    /// ascending.
    pub fn set_sort(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.sort = match self.sort.direction_for(&key) {
            Some(direction) => SortSpec {
                key: Some(key),
                direction: direction.toggle(),
            },
            None => SortSpec::ascending(key),
        };

        tracing::debug!(table = %self.config.name, sort = %self.sort, "sort changed");
    }

    /// Replace the whole sort specification
    pub fn apply_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        tracing::debug!(table = %self.config.name, sort = %self.sort, "sort replaced");
    }

    /// Back to insertion order
    pub fn clear_sort(&mut self) {
        self.apply_sort(SortSpec::unsorted());
    }

    /// Replace the status filter and return to the first page
    pub fn set_filter(&mut self, status: impl Into<StatusFilter>) {
        self.filter.status = status.into();
        self.page.current_page = 1;

        tracing::debug!(table = %self.config.name, status = ?self.filter.status, "filter changed");
    }

    /// Replace the category (type) filter and return to the first page
    pub fn set_type_filter(&mut self, category: impl Into<CategoryFilter>) {
        self.filter.category = category.into();
        self.page.current_page = 1;

        tracing::debug!(
            table = %self.config.name,
            category = ?self.filter.category,
            "type filter changed"
        );
    }

    /// Replace the search term and return to the first page
    ///
    /// An empty or blank term clears the search.
    pub fn set_search(&mut self, term: &str) {
        let term = term.trim();
        self.filter.search = (!term.is_empty()).then(|| term.to_string());
        self.page.current_page = 1;

        tracing::debug!(table = %self.config.name, search = ?self.filter.search, "search changed");
    }

    /// Change the page size and return to the first page
    ///
    /// A zero page size is rejected and leaves the state unchanged.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            tracing::warn!(table = %self.config.name, "rejected zero page size");
            return Err(TableError::InvalidConfiguration {
                field: "page_size".to_string(),
                value: page_size.to_string(),
                message: "page size must be at least 1".to_string(),
            }
            .into());
        }

        self.page = PageSpec {
            page_size,
            current_page: 1,
        };

        tracing::debug!(table = %self.config.name, page_size, "page size changed");
        Ok(())
    }

    /// Jump to `page`, clamped into `[1, total_pages]`
    pub fn goto_page(&mut self, page: i64) {
        let total = self.filtered_count();
        self.page.current_page = self.page.clamp_page(page, total);

        tracing::debug!(
            table = %self.config.name,
            requested = page,
            page = self.page.current_page,
            "page changed"
        );
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.page.current_page as i64 + 1);
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.page.current_page as i64 - 1);
    }

    /// Replace the dataset and return to the first page
    pub fn set_dataset(&mut self, dataset: Vec<R>) {
        self.dataset = dataset;
        self.page.current_page = 1;

        tracing::debug!(table = %self.config.name, rows = self.dataset.len(), "dataset replaced");
    }

    // === Derivation ===

    /// Sorted and filtered rows, across all pages
    pub fn filtered_rows(&self) -> Vec<&R> {
        let sorted = pipeline::sort_rows(&self.dataset, &self.sort, Some(&self.config));
        pipeline::filter_rows(sorted, &self.filter)
    }

    /// Number of rows passing the filter
    pub fn filtered_count(&self) -> usize {
        self.dataset.iter().filter(|r| self.filter.matches(*r)).count()
    }

    /// The rows on the current page plus pagination metadata
    pub fn view(&self) -> TableView<R> {
        let filtered = self.filtered_rows();
        let (rows, pagination) = pipeline::paginate(&filtered, &self.page);

        TableView {
            rows: rows.into_iter().cloned().collect(),
            pagination,
        }
    }

    // === Export ===

    /// Encode every filtered row (all pages) with a caller-supplied projection
    ///
    /// The header line comes first; the delimiter and escaping come from the
    /// export configuration.
    pub fn export_rows<S, F>(&self, headers: &[S], serializer: F) -> String
    where
        S: AsRef<str>,
        F: Fn(&R) -> Vec<String>,
    {
        let rows = self.filtered_rows();
        let export = &self.config.export;

        tracing::debug!(table = %self.config.name, rows = rows.len(), "exporting rows");
        export::encode(
            headers,
            rows.into_iter().map(serializer),
            &export.delimiter,
            export.escaping,
        )
    }

    /// Export the configured columns of every filtered row
    ///
    /// Columns come from the table schema. An engine built with
    /// [`TableEngine::new`] declares none, so its export is an empty header
    /// followed by one empty line per row; use [`TableEngine::export_rows`]
    /// there instead.
    pub fn export_csv(&self) -> String {
        let columns: Vec<(&str, &str)> = self
            .config
            .export_columns()
            .map(|(key, column)| (key, column.header.as_str()))
            .collect();
        let headers: Vec<&str> = columns.iter().map(|(_, header)| *header).collect();

        self.export_rows(&headers, |record| {
            columns
                .iter()
                .map(|(key, _)| {
                    record
                        .field_value(key)
                        .map(|v| v.to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
    }

    /// CSV export wrapped as a downloadable file
    pub fn export_file(&self) -> ExportFile {
        ExportFile::new(&self.config.export, self.export_csv(), self.filtered_count())
    }
}
