// Domain layer - dataset, chart payloads, layout and navigation state
pub mod chart;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod ranking;
