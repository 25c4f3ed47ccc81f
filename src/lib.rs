#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod minify;
pub mod models;
pub mod project;
pub mod publisher;
pub mod rewrite;
pub mod stamp;

pub use models::PublishSummary;
pub use publisher::Publisher;
pub use stamp::VersionStamp;
