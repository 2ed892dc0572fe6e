// Application layer - use cases over the dashboard domain
pub mod dashboard_service;
pub mod navigation_service;
