pub mod config;
pub mod paths;

pub use config::{Config, YoutubeConfig};
pub use paths::PathManager;
