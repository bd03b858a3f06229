//! Statistics domain
//!
//! Pure derivation of dashboard figures from per-person yearly revenue and
//! expense mappings. Nothing here fetches data: the store hands over
//! [`CompanyFigures`] and a [`GlobalSummary`], and the aggregator computes
//! the shared year window and the cash-flow rows the dashboard renders.

pub mod aggregator;
pub mod summary;
pub mod view_state;

pub use aggregator::{cash_flow_rows, year_window, CashFlowRow, YEAR_WINDOW_SIZE};
pub use summary::{CompanyFigures, GlobalSummary};
pub use view_state::{DashboardState, DashboardTab, SummaryFilter};
