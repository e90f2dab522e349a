pub mod bucket;
pub mod duration;
pub mod ledger;
pub mod rating;
pub mod video;

pub use bucket::LengthBucket;
pub use duration::parse_iso8601_minutes;
pub use ledger::{VideoClass, WatchLedger};
pub use rating::calculate_rating;
pub use video::VideoRecord;
