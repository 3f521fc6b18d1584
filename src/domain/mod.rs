// Domain types and value objects
pub mod asset;
pub mod summary;

// Re-export commonly used types
pub use asset::{AssetRecord, Dataset, DatasetError};
pub use summary::{DisplayField, PortfolioSummary, StatKind, display_fields};
