// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod stromgedacht_client;
pub mod svg_surface;
