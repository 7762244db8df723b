mod error;
mod gateway;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use gateway::CacheGateway;
pub use keys::POSTS_LISTING;
pub use serialization::{deserialize_posts, serialize_posts, SerializationError};
pub use traits::Cache;
