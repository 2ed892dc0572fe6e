// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::navigation_service::NavigationService;
use crate::domain::layout::TabLayout;
use crate::infrastructure::config::PageSettings;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub navigation_service: NavigationService,
    pub page: PageSettings,
    pub tabs: Vec<TabLayout>,
}
