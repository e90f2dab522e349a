pub mod error;
pub mod youtube;

pub use error::SourceError;
pub use youtube::{SearchOutcome, YoutubeClient};
