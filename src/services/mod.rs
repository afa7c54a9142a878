pub mod categorizer;
pub mod converter;
pub mod ingest;

pub use categorizer::{assign_category, extract_players};
pub use converter::ActivityConverter;
pub use ingest::{IngestError, IngestService, IngestSummary};
