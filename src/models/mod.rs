pub mod activity;
pub mod channel;
pub mod feedback;
pub mod level;
pub mod search;

pub use activity::{Activity, ActivityRecord};
pub use channel::Channel;
pub use feedback::Feedback;
pub use level::Level;
pub use search::{FilterColumn, SearchFilters, SearchResponse, SortKey};
