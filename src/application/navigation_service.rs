// Navigation service - default markers and selection acknowledgements
use crate::domain::error::DashboardError;
use crate::domain::navigation::{
    FilterAcknowledgement, NavigationSnapshot, NavigationState, ToggleGroup, FISCAL_YEAR_GROUP,
    TAB_GROUP,
};
use std::sync::Arc;

/// Holds the markers every page load starts from. Selections are checked
/// against it and echoed back, but never stored.
#[derive(Clone)]
pub struct NavigationService {
    defaults: Arc<NavigationState>,
}

impl NavigationService {
    pub fn new(
        tabs: Vec<String>,
        default_tab: &str,
        fiscal_years: Vec<String>,
        default_fiscal_year: &str,
    ) -> Result<Self, DashboardError> {
        let defaults = NavigationState {
            tabs: ToggleGroup::new(TAB_GROUP, tabs, default_tab)?,
            fiscal_year: ToggleGroup::new(FISCAL_YEAR_GROUP, fiscal_years, default_fiscal_year)?,
        };

        Ok(Self {
            defaults: Arc::new(defaults),
        })
    }

    /// Markers as the client shows them after clicking `id` on a fresh page
    pub fn select_tab(&self, id: &str) -> Result<NavigationSnapshot, DashboardError> {
        let mut state = self.initial_state();
        state.tabs.select(id)?;
        tracing::info!(tab = id, "Tab selected");
        Ok(state.snapshot())
    }

    /// Moves the filter highlight only. Charts keep their original payloads.
    pub fn select_fiscal_year(&self, value: &str) -> Result<FilterAcknowledgement, DashboardError> {
        let mut state = self.initial_state();
        let selected = state.fiscal_year.select(value)?;
        tracing::info!(fiscal_year = selected, "Fiscal year filter selected (no data refresh)");
        Ok(FilterAcknowledgement::new(selected))
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.defaults.snapshot()
    }

    /// Markers for a newly loaded page
    pub fn initial_state(&self) -> NavigationState {
        self.defaults.as_ref().clone()
    }
}
