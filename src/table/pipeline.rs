//! Derivation pipeline: sort, then filter, then paginate
//!
//! Every stage is a pure function of its inputs. Sorting uses
//! `slice::sort_by`, which is stable, and a descending sort reverses the
//! comparator rather than the output so equal keys keep input order in both
//! directions.
//!
//! A sort key declared in the [`TableConfig`] is coerced with its declared
//! [`FieldKind`]. An undeclared key takes the kind implied by its values, so a
//! numeric column still treats missing or unreadable entries as `0`.

use crate::config::TableConfig;
use crate::core::{
    FieldKind, FieldValue, FilterSpec, PageInfo, PageSpec, Record, SortDirection, SortSpec,
};
use std::cmp::Ordering;

/// Sort stage
///
/// Returns references to `rows` in sort order; the identity permutation when
/// no key is set.
pub fn sort_rows<'a, R: Record>(
    rows: &'a [R],
    sort: &SortSpec,
    config: Option<&TableConfig>,
) -> Vec<&'a R> {
    let Some(key) = sort.key.as_deref() else {
        return rows.iter().collect();
    };

    let direction = sort.direction;

    // project each key once instead of per comparison
    let raw: Vec<(Option<FieldValue>, &R)> =
        rows.iter().map(|r| (r.field_value(key), r)).collect();

    let kind = config
        .and_then(|c| c.kind_of(key))
        .or_else(|| FieldKind::infer(raw.iter().filter_map(|(v, _)| v.as_ref())));

    let mut keyed: Vec<(FieldValue, &R)> = raw
        .into_iter()
        .map(|(value, r)| {
            let value = match kind {
                Some(kind) => kind.coerce(value.as_ref()),
                None => value.unwrap_or(FieldValue::Null),
            };
            (value, r)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| directed(a.total_cmp(b), direction));
    keyed.into_iter().map(|(_, r)| r).collect()
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Filter stage
pub fn filter_rows<'a, R: Record>(rows: Vec<&'a R>, filter: &FilterSpec) -> Vec<&'a R> {
    rows.into_iter().filter(|r| filter.matches(*r)).collect()
}

/// Pagination stage
///
/// The requested page is clamped into range; the returned metadata carries the
/// page actually shown.
pub fn paginate<'a, R>(rows: &[&'a R], page: &PageSpec) -> (Vec<&'a R>, PageInfo) {
    let total = rows.len();
    let current = page.clamp_page(page.current_page as i64, total);
    let info = PageInfo::new(current, page.page_size, total);

    let start = info.offset().min(total);
    let end = (start + info.page_size).min(total);
    (rows[start..end].to_vec(), info)
}
