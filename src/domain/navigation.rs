// Navigation domain model - toggle groups with a single active option
use super::error::DashboardError;
use serde::Serialize;

pub const TAB_GROUP: &str = "tab";
pub const FISCAL_YEAR_GROUP: &str = "fiscal year";

/// A set of buttons of which exactly one carries the active marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleGroup {
    group: &'static str,
    options: Vec<String>,
    active: usize,
}

impl ToggleGroup {
    pub fn new(
        group: &'static str,
        options: Vec<String>,
        default: &str,
    ) -> Result<Self, DashboardError> {
        let active = options
            .iter()
            .position(|o| o == default)
            .ok_or_else(|| DashboardError::InvalidDefault {
                group,
                id: default.to_string(),
            })?;

        Ok(Self {
            group,
            options,
            active,
        })
    }

    /// Move the active marker to `id`. Reselecting the active option is a no-op.
    pub fn select(&mut self, id: &str) -> Result<&str, DashboardError> {
        let index = self
            .options
            .iter()
            .position(|o| o == id)
            .ok_or_else(|| DashboardError::UnknownOption {
                group: self.group,
                id: id.to_string(),
            })?;
        self.active = index;
        Ok(&self.options[index])
    }

    pub fn active(&self) -> &str {
        &self.options[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub tabs: ToggleGroup,
    pub fiscal_year: ToggleGroup,
}

impl NavigationState {
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            active_tab: self.tabs.active().to_string(),
            active_fiscal_year: self.fiscal_year.active().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationSnapshot {
    pub active_tab: String,
    pub active_fiscal_year: String,
}

/// Notice shown after a fiscal year is picked. Nothing is actually reloaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterAcknowledgement {
    pub fiscal_year: String,
    pub message: String,
}

impl FilterAcknowledgement {
    pub fn new(fiscal_year: &str) -> Self {
        Self {
            fiscal_year: fiscal_year.to_string(),
            message: format!("Fiscal Year set to {}. Data refreshed (Simulation).", fiscal_year),
        }
    }
}
