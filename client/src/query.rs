//! Query construction: hierarchical path assembly and query parameters.
//!
//! `build` is a pure function from a [`ResourceDescriptor`] and a
//! [`QueryRequest`] to the concrete path and ordered parameter list sent
//! upstream. Keeping it side-effect free lets every routing rule be tested
//! without a network.

use crate::catalog::{ResourceDescriptor, SortRule};

/// Sort order applied when a sortable resource is queried without an
/// explicit `sort` argument.
pub const DEFAULT_SORT: &str = "updateDate+desc";

/// Pagination window. Defaults to the first 20 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

/// Optional update-date window, ISO-8601 timestamps (`YYYY-MM-DDTHH:MM:SSZ`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// One query against a catalog resource, built by an operation method and
/// consumed immediately by [`build`].
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    /// Hierarchical identifier values, in the descriptor's segment order.
    /// A later value is honored only if every earlier one is present.
    pub path_values: Vec<Option<String>>,
    pub page: Page,
    pub date_range: DateRange,
    /// Caller sort override; only meaningful for sortable resources.
    pub sort: Option<String>,
    /// Extra resource-specific query parameters (e.g. `currentMember`).
    pub extra_params: Vec<(&'static str, String)>,
}

/// Convert an optional numeric identifier into a path value.
///
/// Zero counts as absent. This mirrors the upstream-compatible truthiness
/// rule: an identifier of `0` is never addressed directly.
#[must_use]
pub fn numeric_id<T: Into<u64>>(value: Option<T>) -> Option<String> {
    value.map(Into::into).filter(|&v| v != 0).map(|v| v.to_string())
}

/// Convert an optional string identifier into a path value.
///
/// The empty string counts as absent, matching [`numeric_id`].
#[must_use]
pub fn string_id(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Build the concrete request path and ordered query parameters.
///
/// Path rule: walk the identifier values in segment order and append each to
/// the base path until the first absent one; everything deeper is dropped,
/// even if supplied. Parameter rules: `offset` always; `limit` clamped to the
/// resource's page cap; date filters only when present and supported; `sort`
/// per the resource's [`SortRule`], with [`SortRule::UnlessItem`] omitting it
/// once the path resolved every segment.
#[must_use]
pub fn build(
    resource: &ResourceDescriptor,
    request: &QueryRequest,
) -> (String, Vec<(&'static str, String)>) {
    let mut path = resource.base_path.to_string();
    let mut resolved = 0usize;
    for value in &request.path_values {
        let Some(value) = value else { break };
        path.push('/');
        path.push_str(value);
        resolved += 1;
    }

    let is_item = !resource.segments.is_empty() && resolved == resource.segments.len();

    let mut params: Vec<(&'static str, String)> = vec![
        ("offset", request.page.offset.to_string()),
        (
            "limit",
            request.page.limit.min(resource.max_page_size).to_string(),
        ),
    ];

    if resource.date_range && !request.date_range.is_empty() {
        if let Some(from) = string_id(request.date_range.from.clone()) {
            params.push(("fromDateTime", from));
        }
        if let Some(to) = string_id(request.date_range.to.clone()) {
            params.push(("toDateTime", to));
        }
    }

    let include_sort = match resource.sort {
        SortRule::Never => false,
        SortRule::Always => true,
        SortRule::UnlessItem => !is_item,
    };
    if include_sort {
        let sort = request
            .sort
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SORT.to_string());
        params.push(("sort", sort));
    }

    params.extend(request.extra_params.iter().cloned());

    (path, params)
}
