pub mod youtube;

pub use youtube::{format_duration, YoutubeClient};
