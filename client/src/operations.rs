//! Typed operation surface: one entry point per catalog resource.
//!
//! Every method here is a thin wrapper with the same shape: convert the
//! caller's typed identifiers into ordered path values, assemble a
//! [`QueryRequest`], and delegate to [`CongressClient::execute`] with the
//! statically bound descriptor. All routing rules live in the catalog and
//! the builder, not here.
//!
//! Identifier nesting follows the upstream hierarchy: a deeper identifier
//! (e.g. `bill_number`) only takes effect when every shallower one
//! (`congress`, `bill_type`) is also supplied.

use crate::catalog;
use crate::client::{CongressClient, QueryResult};
use crate::query::{numeric_id, string_id, DateRange, Page, QueryRequest};

/// Filters for the bills listing and single-bill lookup.
///
/// `sort` defaults to `updateDate+desc` and is dropped automatically when
/// `congress`, `bill_type`, and `bill_number` resolve a single bill.
#[derive(Debug, Clone, Default)]
pub struct BillsQuery {
    /// Congress number (e.g. 118 for the 118th Congress).
    pub congress: Option<u32>,
    /// Bill type: hr, s, hjres, sjres, hconres, sconres, hres, sres.
    pub bill_type: Option<String>,
    /// Specific bill number; requires `congress` and `bill_type`.
    pub bill_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AmendmentsQuery {
    pub congress: Option<u32>,
    /// Amendment type: hamdt or samdt.
    pub amendment_type: Option<String>,
    pub amendment_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct SummariesQuery {
    pub congress: Option<u32>,
    pub bill_type: Option<String>,
    pub page: Page,
    pub date_range: DateRange,
    /// Defaults to `updateDate+desc`; summaries always sort.
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CongressQuery {
    pub congress: Option<u32>,
    pub page: Page,
}

#[derive(Debug, Clone, Default)]
pub struct MembersQuery {
    /// Bioguide ID for a single-member lookup (e.g. "A000374").
    pub bioguide_id: Option<String>,
    /// Restrict the listing to currently serving members.
    pub current_member: Option<bool>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct HouseVotesQuery {
    pub congress: Option<u32>,
    /// Session within the congress (1 or 2).
    pub session: Option<u32>,
    pub roll_call: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CommitteesQuery {
    /// Committee system code (e.g. "hsag00").
    pub system_code: Option<String>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CommitteeReportsQuery {
    pub congress: Option<u32>,
    /// Report type: hrpt, srpt, or erpt.
    pub report_type: Option<String>,
    pub report_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CommitteePrintsQuery {
    pub congress: Option<u32>,
    /// Print type: hprt or sprt.
    pub print_type: Option<String>,
    pub print_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CommitteeMeetingsQuery {
    pub congress: Option<u32>,
    /// "house", "senate", or "nochamber".
    pub chamber: Option<String>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct HearingsQuery {
    pub congress: Option<u32>,
    pub chamber: Option<String>,
    pub jacket_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CongressionalRecordQuery {
    pub volume: Option<u32>,
    /// Page prefix within the volume (e.g. "s" for Senate pages).
    pub page_prefix: Option<String>,
    pub page_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct DailyCongressionalRecordQuery {
    pub volume: Option<u32>,
    pub issue: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct BoundCongressionalRecordQuery {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CommunicationsQuery {
    pub congress: Option<u32>,
    /// Communication type code (e.g. "ec", "pm", "pom").
    pub communication_type: Option<String>,
    pub communication_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct HouseRequirementsQuery {
    pub congress: Option<u32>,
    pub requirement_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct NominationsQuery {
    pub congress: Option<u32>,
    pub nomination_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct TreatiesQuery {
    pub congress: Option<u32>,
    pub treaty_number: Option<u32>,
    pub page: Page,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default)]
pub struct CrsReportsQuery {
    /// CRS product code (e.g. "R47175").
    pub product_code: Option<String>,
    pub page: Page,
    pub date_range: DateRange,
}

impl CongressClient {
    /// Retrieve bills, or one bill when the full hierarchy is supplied.
    pub async fn get_bills(&self, query: BillsQuery) -> QueryResult {
        self.execute(
            &catalog::BILLS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    string_id(query.bill_type),
                    numeric_id(query.bill_number),
                ],
                page: query.page,
                date_range: query.date_range,
                sort: query.sort,
                extra_params: Vec::new(),
            },
        )
        .await
    }

    /// Retrieve amendments, or one amendment when fully qualified.
    pub async fn get_amendments(&self, query: AmendmentsQuery) -> QueryResult {
        self.execute(
            &catalog::AMENDMENTS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    string_id(query.amendment_type),
                    numeric_id(query.amendment_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve bill summaries.
    pub async fn get_summaries(&self, query: SummariesQuery) -> QueryResult {
        self.execute(
            &catalog::SUMMARIES,
            &QueryRequest {
                path_values: vec![numeric_id(query.congress), string_id(query.bill_type)],
                page: query.page,
                date_range: query.date_range,
                sort: query.sort,
                extra_params: Vec::new(),
            },
        )
        .await
    }

    /// Retrieve congress information, or one congress by number.
    pub async fn get_congress(&self, query: CongressQuery) -> QueryResult {
        self.execute(
            &catalog::CONGRESS,
            &QueryRequest {
                path_values: vec![numeric_id(query.congress)],
                page: query.page,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve members, or one member by Bioguide ID.
    pub async fn get_members(&self, query: MembersQuery) -> QueryResult {
        let mut extra_params = Vec::new();
        if let Some(current) = query.current_member {
            extra_params.push(("currentMember", current.to_string()));
        }
        self.execute(
            &catalog::MEMBERS,
            &QueryRequest {
                path_values: vec![string_id(query.bioguide_id)],
                page: query.page,
                date_range: query.date_range,
                sort: None,
                extra_params,
            },
        )
        .await
    }

    /// Retrieve House roll call votes.
    pub async fn get_house_votes(&self, query: HouseVotesQuery) -> QueryResult {
        self.execute(
            &catalog::HOUSE_VOTES,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    numeric_id(query.session),
                    numeric_id(query.roll_call),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve committees, or one committee by system code.
    pub async fn get_committees(&self, query: CommitteesQuery) -> QueryResult {
        self.execute(
            &catalog::COMMITTEES,
            &QueryRequest {
                path_values: vec![string_id(query.system_code)],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve committee reports.
    pub async fn get_committee_reports(&self, query: CommitteeReportsQuery) -> QueryResult {
        self.execute(
            &catalog::COMMITTEE_REPORTS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    string_id(query.report_type),
                    numeric_id(query.report_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve committee prints.
    pub async fn get_committee_prints(&self, query: CommitteePrintsQuery) -> QueryResult {
        self.execute(
            &catalog::COMMITTEE_PRINTS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    string_id(query.print_type),
                    numeric_id(query.print_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve committee meetings.
    pub async fn get_committee_meetings(&self, query: CommitteeMeetingsQuery) -> QueryResult {
        self.execute(
            &catalog::COMMITTEE_MEETINGS,
            &QueryRequest {
                path_values: vec![numeric_id(query.congress), string_id(query.chamber)],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve hearings.
    pub async fn get_hearings(&self, query: HearingsQuery) -> QueryResult {
        self.execute(
            &catalog::HEARINGS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    string_id(query.chamber),
                    numeric_id(query.jacket_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve congressional record issues.
    pub async fn get_congressional_record(&self, query: CongressionalRecordQuery) -> QueryResult {
        self.execute(
            &catalog::CONGRESSIONAL_RECORD,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.volume),
                    string_id(query.page_prefix),
                    numeric_id(query.page_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve daily congressional record issues.
    pub async fn get_daily_congressional_record(
        &self,
        query: DailyCongressionalRecordQuery,
    ) -> QueryResult {
        self.execute(
            &catalog::DAILY_CONGRESSIONAL_RECORD,
            &QueryRequest {
                path_values: vec![numeric_id(query.volume), numeric_id(query.issue)],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve bound congressional record issues.
    pub async fn get_bound_congressional_record(
        &self,
        query: BoundCongressionalRecordQuery,
    ) -> QueryResult {
        self.execute(
            &catalog::BOUND_CONGRESSIONAL_RECORD,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.year),
                    numeric_id(query.month),
                    numeric_id(query.day),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve House communications.
    pub async fn get_house_communications(&self, query: CommunicationsQuery) -> QueryResult {
        self.execute(&catalog::HOUSE_COMMUNICATIONS, &communication_request(query))
            .await
    }

    /// Retrieve Senate communications.
    pub async fn get_senate_communications(&self, query: CommunicationsQuery) -> QueryResult {
        self.execute(&catalog::SENATE_COMMUNICATIONS, &communication_request(query))
            .await
    }

    /// Retrieve House clerk reporting requirements.
    pub async fn get_house_requirements(&self, query: HouseRequirementsQuery) -> QueryResult {
        self.execute(
            &catalog::HOUSE_REQUIREMENTS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    numeric_id(query.requirement_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve nominations.
    pub async fn get_nominations(&self, query: NominationsQuery) -> QueryResult {
        self.execute(
            &catalog::NOMINATIONS,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    numeric_id(query.nomination_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve treaties.
    pub async fn get_treaties(&self, query: TreatiesQuery) -> QueryResult {
        self.execute(
            &catalog::TREATIES,
            &QueryRequest {
                path_values: vec![
                    numeric_id(query.congress),
                    numeric_id(query.treaty_number),
                ],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }

    /// Retrieve CRS reports, or one report by product code.
    pub async fn get_crs_reports(&self, query: CrsReportsQuery) -> QueryResult {
        self.execute(
            &catalog::CRS_REPORTS,
            &QueryRequest {
                path_values: vec![string_id(query.product_code)],
                page: query.page,
                date_range: query.date_range,
                ..QueryRequest::default()
            },
        )
        .await
    }
}

// House and Senate communications share a shape; only the descriptor differs.
fn communication_request(query: CommunicationsQuery) -> QueryRequest {
    QueryRequest {
        path_values: vec![
            numeric_id(query.congress),
            string_id(query.communication_type),
            numeric_id(query.communication_number),
        ],
        page: query.page,
        date_range: query.date_range,
        ..QueryRequest::default()
    }
}
