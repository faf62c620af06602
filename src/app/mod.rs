pub mod comments;
pub mod markdown;
pub mod posts;
