pub mod error;
pub mod feed;
mod submit;
mod vote;

pub use error::FeedError;
pub use feed::{FEED_LIMIT, Feed, FeedSnapshot, FeedUpdate};
