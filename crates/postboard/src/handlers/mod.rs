pub mod error;
pub mod health;
pub mod posts;
pub mod repost;
pub mod users;

pub use error::AppError;
