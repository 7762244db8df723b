mod coordinator;
mod error;

pub use coordinator::RepostCoordinator;
pub use error::RepostError;
