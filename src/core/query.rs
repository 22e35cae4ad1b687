//! Sort, filter and pagination specifications

use crate::core::error::ValidationError;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Which field to sort on, and in which direction
///
/// `key == None` keeps insertion order; `direction` is ignored then.
///
/// # Format
/// - `field` or `field:asc` (ascending)
/// - `field:desc` (descending)
///
/// ```
/// use insights::core::query::{SortDirection, SortSpec};
///
/// let spec: SortSpec = "budget:desc".parse().unwrap();
/// assert_eq!(spec.key.as_deref(), Some("budget"));
/// assert_eq!(spec.direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Unsorted (insertion order)
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort ascending on `key`
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort descending on `key`
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Descending,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.key.is_some()
    }

    /// Direction currently applied to `key`, if `key` is the sort key
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match &self.key {
            Some(k) if k == key => Some(self.direction),
            _ => None,
        }
    }
}

impl FromStr for SortSpec {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::unsorted());
        }

        let (key, direction) = match s.split_once(':') {
            Some((key, dir)) => {
                let direction = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortDirection::Ascending,
                    "desc" => SortDirection::Descending,
                    _ => {
                        return Err(ValidationError::InvalidSortSpec {
                            value: s.to_string(),
                            message: "direction must be 'asc' or 'desc'".to_string(),
                        });
                    }
                };
                (key.trim(), direction)
            }
            None => (s, SortDirection::Ascending),
        };

        if key.is_empty() {
            return Err(ValidationError::InvalidSortSpec {
                value: s.to_string(),
                message: "missing field name".to_string(),
            });
        }

        Ok(Self {
            key: Some(key.to_string()),
            direction,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}:{}", key, self.direction.as_str()),
            None => Ok(()),
        }
    }
}

/// Equality filter on the record status
///
/// Parsing `"all"` (any case) yields [`StatusFilter::All`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Whether a record with `status` passes the filter
    ///
    /// Comparison ignores case. A record without a status only passes `All`.
    pub fn matches(&self, status: Option<&str>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => {
                status.is_some_and(|s| s.to_lowercase() == wanted.to_lowercase())
            }
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.trim().to_string())
        }
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        StatusFilter::from(value.as_str())
    }
}

/// Equality filter on the record category (campaign type, report type)
///
/// Same `"all"` sentinel and case rules as [`StatusFilter`].
pub type CategoryFilter = StatusFilter;

/// Record filter: status and category equality plus optional free-text search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub category: CategoryFilter,
    pub search: Option<String>,
}

impl FilterSpec {
    /// Whether `record` passes every filter dimension
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.status.matches(record.status())
            && self.category.matches(record.category())
            && self.matches_search(&record.search_text())
    }

    /// Whether the search term (if any) occurs in one of `fields`, ignoring case
    pub fn matches_search(&self, fields: &[&str]) -> bool {
        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                fields.iter().any(|f| f.to_lowercase().contains(&term))
            }
        }
    }
}

/// Page size and requested page
///
/// `page_size` is kept at least 1 by the engine, which rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl PageSpec {
    /// Number of pages for `total` rows, never less than 1
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// `page` clamped into `[1, total_pages(total)]`
    pub fn clamp_page(&self, page: i64, total: usize) -> usize {
        let last = self.total_pages(total);
        if page < 1 {
            1
        } else {
            usize::try_from(page).map_or(last, |p| p.min(last))
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub page_size: usize,

    /// Total number of rows (after filters)
    pub total: usize,

    /// Total number of pages (at least 1)
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageInfo {
    /// Create pagination metadata for an already clamped `page`
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Zero-based offset of the first row on this page
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// 1-based `(first, last)` row numbers shown on this page, `(0, 0)` when empty
    pub fn range(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = self.offset() + 1;
        let last = (self.page * self.page_size).min(self.total);
        (first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_parse() {
        let spec: SortSpec = "amount".parse().unwrap();
        assert_eq!(spec, SortSpec::ascending("amount"));

        let spec: SortSpec = "created_at:DESC".parse().unwrap();
        assert_eq!(spec, SortSpec::descending("created_at"));

        let spec: SortSpec = "".parse().unwrap();
        assert!(!spec.is_sorted());
    }

    #[test]
    fn test_sort_spec_parse_rejects_bad_direction() {
        let err = "name:sideways".parse::<SortSpec>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSortSpec { .. }));
        assert!(":asc".parse::<SortSpec>().is_err());
    }

    #[test]
    fn test_sort_spec_display() {
        assert_eq!(SortSpec::descending("roas").to_string(), "roas:desc");
        assert_eq!(SortSpec::unsorted().to_string(), "");
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!(StatusFilter::from("all"), StatusFilter::All);
        assert_eq!(StatusFilter::from("ALL"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from("Active"),
            StatusFilter::Only("Active".to_string())
        );
    }

    #[test]
    fn test_status_filter_ignores_case() {
        let filter = StatusFilter::from("active");
        assert!(filter.matches(Some("Active")));
        assert!(!filter.matches(Some("Paused")));
        assert!(!filter.matches(None));
        assert!(StatusFilter::All.matches(None));
    }

    #[test]
    fn test_search_matches_any_field() {
        let filter = FilterSpec {
            search: Some("sale".to_string()),
            ..FilterSpec::default()
        };
        assert!(filter.matches_search(&["Summer Sale 2024"]));
        assert!(!filter.matches_search(&["Product Launch", "new users"]));
        assert!(FilterSpec::default().matches_search(&[]));
    }

    #[derive(Clone)]
    struct Tagged {
        status: &'static str,
        category: Option<&'static str>,
        label: &'static str,
    }

    impl Record for Tagged {
        fn field_value(&self, _field: &str) -> Option<crate::core::FieldValue> {
            None
        }

        fn status(&self) -> Option<&str> {
            Some(self.status)
        }

        fn category(&self) -> Option<&str> {
            self.category
        }

        fn search_text(&self) -> Vec<&str> {
            vec![self.label]
        }
    }

    #[test]
    fn test_filter_combines_all_dimensions() {
        let record = Tagged {
            status: "Active",
            category: Some("Email Marketing"),
            label: "Summer Sale",
        };
        let uncategorized = Tagged {
            category: None,
            ..record.clone()
        };

        let filter = FilterSpec {
            status: StatusFilter::from("active"),
            category: CategoryFilter::from("Email Marketing"),
            search: Some("sale".to_string()),
        };
        assert!(filter.matches(&record));
        assert!(!filter.matches(&uncategorized));

        let wrong_type = FilterSpec {
            category: CategoryFilter::from("Google Ads"),
            ..filter.clone()
        };
        assert!(!wrong_type.matches(&record));
        assert!(FilterSpec::default().matches(&uncategorized));
    }

    #[test]
    fn test_page_spec_clamp() {
        let spec = PageSpec {
            page_size: 5,
            current_page: 1,
        };
        assert_eq!(spec.total_pages(11), 3);
        assert_eq!(spec.total_pages(0), 1);
        assert_eq!(spec.clamp_page(10, 11), 3);
        assert_eq!(spec.clamp_page(0, 11), 1);
        assert_eq!(spec.clamp_page(-4, 11), 1);
    }

    #[test]
    fn test_page_info() {
        let info = PageInfo::new(1, 20, 145);
        assert_eq!(info.total, 145);
        assert_eq!(info.total_pages, 8);
        assert!(!info.has_prev);
        assert!(info.has_next);
        assert_eq!(info.range(), (1, 20));
    }

    #[test]
    fn test_page_info_last_page_range() {
        let info = PageInfo::new(3, 5, 11);
        assert_eq!(info.range(), (11, 11));
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn test_page_info_empty() {
        let info = PageInfo::new(1, 5, 0);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.range(), (0, 0));
        assert!(!info.has_next);
    }
}
