//! Configuration module for the dashboard.

pub mod animation;
pub mod chart;

mod debug; // Private: use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use animation::ANIMATION;
pub use chart::CHART_THEME;
