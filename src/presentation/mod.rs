// Presentation layer - HTTP surface and HTML rendering
pub mod app_state;
pub mod assets;
pub mod handlers;
pub mod page;
pub mod router;
