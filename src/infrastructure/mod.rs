// Infrastructure layer - configuration, logging and HTTP plumbing
pub mod config;
pub mod http_response;
pub mod logging;
