pub mod cookies;
pub mod markdown;
pub mod time;

pub use markdown::render_markdown;
pub use time::{date_bucket, format_relative_time, DateBucket};
