//! Dashboard view state
//!
//! The presentation layer owns one explicit, serializable state value and
//! passes it into whatever consumes the aggregator's output. Selection only
//! changes which precomputed series is shown in detail; it never affects
//! the aggregation itself.

use serde::{Deserialize, Serialize};

use core_kernel::PersonId;

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Companies,
    CashFlow,
}

/// Filters the dashboard applies to its summary queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryFilter {
    /// Whether archived invoices join the global summary
    pub include_archived: bool,
}

/// View state of the statistics dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// At most one company selected for the detail chart
    pub selected_company: Option<PersonId>,
    /// Active summary filters
    pub filter: SummaryFilter,
    /// Currently displayed tab
    pub active_tab: DashboardTab,
}

impl DashboardState {
    /// Selects a company for the detail chart; idempotent
    pub fn select_company(&mut self, id: PersonId) {
        if self.selected_company != Some(id) {
            self.selected_company = Some(id);
        }
    }

    /// Clears the selection
    pub fn clear_selection(&mut self) {
        self.selected_company = None;
    }

    pub fn switch_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Toggles archived invoices in and out of the summary
    pub fn set_include_archived(&mut self, include: bool) {
        self.filter.include_archived = include;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_idempotent() {
        let mut state = DashboardState::default();
        state.select_company(PersonId::new(1));
        let snapshot = state.clone();

        state.select_company(PersonId::new(1));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_reselect_switches_company() {
        let mut state = DashboardState::default();
        state.select_company(PersonId::new(1));
        state.select_company(PersonId::new(2));
        assert_eq!(state.selected_company, Some(PersonId::new(2)));
    }

    #[test]
    fn test_state_is_serializable() {
        let mut state = DashboardState::default();
        state.select_company(PersonId::new(3));
        state.switch_tab(DashboardTab::CashFlow);
        state.set_include_archived(true);

        let json = serde_json::to_string(&state).unwrap();
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
