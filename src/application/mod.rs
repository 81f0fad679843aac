// Application layer - use cases and the ports they depend on
pub mod chart_service;
pub mod render_surface;
pub mod shaper;
pub mod signal_source;
