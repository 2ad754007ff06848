//! Static catalog of queryable Congress.gov resources.
//!
//! Every operation the client exposes is derived from one row of this table:
//! the resource's base path, its ordered hierarchical path segments, its
//! pagination cap, and whether sorting and date-range filters apply. The
//! descriptors are `'static` and never mutated, so they are safe to share
//! across any number of concurrent calls.

use thiserror::Error;

/// How the `sort` query parameter applies to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRule {
    /// The resource never accepts a sort parameter.
    Never,
    /// The sort parameter is always sent (caller value or the default).
    Always,
    /// Sent for list queries, suppressed once the path resolves a single
    /// item (every segment present). Bills behave this way: `/bill/118/hr/1`
    /// is one record and is not sorted.
    UnlessItem,
}

/// Immutable definition of one queryable resource type.
#[derive(Debug)]
pub struct ResourceDescriptor {
    /// Unique catalog key (e.g. `"bills"`).
    pub name: &'static str,
    /// Plural label used in error messages ("Failed to retrieve bills: ...").
    pub action_label: &'static str,
    /// Upstream path prefix, without the API base URL.
    pub base_path: &'static str,
    /// Ordered optional path segments. A deeper segment is honored only if
    /// every shallower one was supplied.
    pub segments: &'static [&'static str],
    /// Upstream per-page cap; caller limits are clamped down to this.
    pub max_page_size: u32,
    pub sort: SortRule,
    pub date_range: bool,
}

/// Requested resource name is not in the catalog.
///
/// Not reachable through the typed operation methods, which bind their
/// descriptor at compile time; only name-based lookup (the CLI driver) can
/// hit this.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resource '{0}' (see `catalog::all` for valid names)")]
pub struct UnknownResourceError(pub String);

pub static BILLS: ResourceDescriptor = ResourceDescriptor {
    name: "bills",
    action_label: "bills",
    base_path: "/bill",
    segments: &["congress", "billType", "billNumber"],
    max_page_size: 100,
    sort: SortRule::UnlessItem,
    date_range: true,
};

pub static AMENDMENTS: ResourceDescriptor = ResourceDescriptor {
    name: "amendments",
    action_label: "amendments",
    base_path: "/amendment",
    segments: &["congress", "amendmentType", "amendmentNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static SUMMARIES: ResourceDescriptor = ResourceDescriptor {
    name: "summaries",
    action_label: "summaries",
    base_path: "/summaries",
    segments: &["congress", "billType"],
    max_page_size: 250,
    sort: SortRule::Always,
    date_range: true,
};

pub static CONGRESS: ResourceDescriptor = ResourceDescriptor {
    name: "congress",
    action_label: "congress information",
    base_path: "/congress",
    segments: &["congress"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: false,
};

pub static MEMBERS: ResourceDescriptor = ResourceDescriptor {
    name: "members",
    action_label: "members",
    base_path: "/member",
    segments: &["bioguideId"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static HOUSE_VOTES: ResourceDescriptor = ResourceDescriptor {
    name: "houseVotes",
    action_label: "house votes",
    base_path: "/house-vote",
    segments: &["congress", "session", "rollCall"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static COMMITTEES: ResourceDescriptor = ResourceDescriptor {
    name: "committees",
    action_label: "committees",
    base_path: "/committee",
    segments: &["systemCode"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static COMMITTEE_REPORTS: ResourceDescriptor = ResourceDescriptor {
    name: "committeeReports",
    action_label: "committee reports",
    base_path: "/committee-report",
    segments: &["congress", "reportType", "reportNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static COMMITTEE_PRINTS: ResourceDescriptor = ResourceDescriptor {
    name: "committeePrints",
    action_label: "committee prints",
    base_path: "/committee-print",
    segments: &["congress", "printType", "printNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static COMMITTEE_MEETINGS: ResourceDescriptor = ResourceDescriptor {
    name: "committeeMeetings",
    action_label: "committee meetings",
    base_path: "/committee-meeting",
    segments: &["congress", "chamber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static HEARINGS: ResourceDescriptor = ResourceDescriptor {
    name: "hearings",
    action_label: "hearings",
    base_path: "/hearing",
    segments: &["congress", "chamber", "jacketNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static CONGRESSIONAL_RECORD: ResourceDescriptor = ResourceDescriptor {
    name: "congressionalRecord",
    action_label: "congressional record issues",
    base_path: "/congressional-record",
    segments: &["volume", "pagePrefix", "pageNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static DAILY_CONGRESSIONAL_RECORD: ResourceDescriptor = ResourceDescriptor {
    name: "dailyCongressionalRecord",
    action_label: "daily congressional record issues",
    base_path: "/daily-congressional-record",
    segments: &["volume", "issue"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static BOUND_CONGRESSIONAL_RECORD: ResourceDescriptor = ResourceDescriptor {
    name: "boundCongressionalRecord",
    action_label: "bound congressional record issues",
    base_path: "/bound-congressional-record",
    segments: &["year", "month", "day"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static HOUSE_COMMUNICATIONS: ResourceDescriptor = ResourceDescriptor {
    name: "houseCommunication",
    action_label: "house communications",
    base_path: "/house-communication",
    segments: &["congress", "communicationType", "communicationNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static SENATE_COMMUNICATIONS: ResourceDescriptor = ResourceDescriptor {
    name: "senateCommunication",
    action_label: "senate communications",
    base_path: "/senate-communication",
    segments: &["congress", "communicationType", "communicationNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static HOUSE_REQUIREMENTS: ResourceDescriptor = ResourceDescriptor {
    name: "houseRequirement",
    action_label: "house requirements",
    base_path: "/house-requirement",
    segments: &["congress", "requirementNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static NOMINATIONS: ResourceDescriptor = ResourceDescriptor {
    name: "nomination",
    action_label: "nominations",
    base_path: "/nomination",
    segments: &["congress", "nominationNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static TREATIES: ResourceDescriptor = ResourceDescriptor {
    name: "treaty",
    action_label: "treaties",
    base_path: "/treaty",
    segments: &["congress", "treatyNumber"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

pub static CRS_REPORTS: ResourceDescriptor = ResourceDescriptor {
    name: "crsreport",
    action_label: "CRS reports",
    base_path: "/crsreport",
    segments: &["productCode"],
    max_page_size: 250,
    sort: SortRule::Never,
    date_range: true,
};

static CATALOG: &[&ResourceDescriptor] = &[
    &BILLS,
    &AMENDMENTS,
    &SUMMARIES,
    &CONGRESS,
    &MEMBERS,
    &HOUSE_VOTES,
    &COMMITTEES,
    &COMMITTEE_REPORTS,
    &COMMITTEE_PRINTS,
    &COMMITTEE_MEETINGS,
    &HEARINGS,
    &CONGRESSIONAL_RECORD,
    &DAILY_CONGRESSIONAL_RECORD,
    &BOUND_CONGRESSIONAL_RECORD,
    &HOUSE_COMMUNICATIONS,
    &SENATE_COMMUNICATIONS,
    &HOUSE_REQUIREMENTS,
    &NOMINATIONS,
    &TREATIES,
    &CRS_REPORTS,
];

/// All catalog entries, in declaration order.
#[must_use]
pub fn all() -> &'static [&'static ResourceDescriptor] {
    CATALOG
}

/// Look up a resource descriptor by catalog name.
///
/// # Errors
/// Returns [`UnknownResourceError`] if `name` is not a catalog key.
pub fn lookup(name: &str) -> Result<&'static ResourceDescriptor, UnknownResourceError> {
    CATALOG
        .iter()
        .find(|d| d.name == name)
        .copied()
        .ok_or_else(|| UnknownResourceError(name.to_string()))
}
