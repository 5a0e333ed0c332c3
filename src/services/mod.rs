//! Stateless services that compute aggregates, budget state, reports, and
//! the dashboard summary from ledger snapshots. No service holds state
//! between calls; everything is derived per request.

pub mod aggregation_service;
pub mod budget_service;
pub mod report_service;
pub mod summary_service;

pub use aggregation_service::{AggregationService, Bucketing};
pub use budget_service::BudgetService;
pub use report_service::{Report, ReportKind, ReportService};
pub use summary_service::SummaryService;
