//! Query-string assembly for filtered endpoints
//!
//! Filters whose value is empty or whitespace are omitted, and the "all"
//! category sentinel means unfiltered.

use ecotrack_domain::ActivityFilter;

use super::client::Query;

/// Sentinel select value meaning "no category filter"
const ALL_SENTINEL: &str = "all";

/// Append a pair unless the value is empty or whitespace
pub fn push_filter(query: &mut Query, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            query.push((key, trimmed.to_string()));
        }
    }
}

/// Append the category filter, treating "all" as unfiltered
pub fn push_category_filter(query: &mut Query, key: &'static str, value: Option<&str>) {
    match value {
        Some(v) if v.trim().eq_ignore_ascii_case(ALL_SENTINEL) => {}
        other => push_filter(query, key, other),
    }
}

/// Build the query pairs for the activity list and stats endpoints
pub fn filter_query(filter: &ActivityFilter) -> Query {
    let mut query = Query::new();
    push_filter(&mut query, "startDate", filter.start_date.as_deref());
    push_filter(&mut query, "endDate", filter.end_date.as_deref());
    push_category_filter(&mut query, "activityType", filter.activity_type.as_deref());
    push_filter(&mut query, "activityName", filter.activity_name.as_deref());
    if let Some(page) = filter.page {
        query.push(("page", page.to_string()));
    }
    if let Some(limit) = filter.limit {
        query.push(("limit", limit.to_string()));
    }
    query
}
