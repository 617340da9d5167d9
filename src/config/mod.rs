//! Reporting preferences and their JSON persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{
    EngineConfig, ExpenseRollup, DEFAULT_FALLBACK_CATEGORY_LABEL, DEFAULT_TREND_WINDOW_MONTHS,
};
