//! Record trait implemented by every row type the table engine manages

use crate::core::field::FieldValue;

/// A single row of a dataset.
///
/// The engine never inspects a record directly. Sorting and export go
/// through [`Record::field_value`], the status filter through
/// [`Record::status`], the category filter through [`Record::category`] and
/// free-text search through [`Record::search_text`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Get the value of a specific field by name
    ///
    /// Returns `None` when the record does not carry the field.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// The status consulted by the status filter
    fn status(&self) -> Option<&str>;

    /// The category consulted by the category filter
    fn category(&self) -> Option<&str> {
        None
    }

    /// Text fields matched by the search filter
    fn search_text(&self) -> Vec<&str> {
        Vec::new()
    }
}
