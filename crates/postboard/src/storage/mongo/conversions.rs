//! BSON document conversions for posts.
//!
//! Pure functions for converting between the stored document shape and the
//! domain types. These are testable in isolation without MongoDB access.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use postboard_core::posts::{Post, PostDraft};
use postboard_core::storage::StorageError;

/// Stored shape of a post document.
///
/// `_id` is `None` before insert; the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub company: String,
    pub location: String,
    pub salary: String,
}

impl PostDocument {
    /// Builds an insertable document (no `_id`) from a draft.
    pub fn from_draft(draft: &PostDraft) -> Self {
        Self {
            id: None,
            title: draft.title.clone(),
            content: draft.content.clone(),
            company: draft.company.clone(),
            location: draft.location.clone(),
            salary: draft.salary.clone(),
        }
    }

    /// Converts a fetched document into the domain type.
    ///
    /// Documents read back from the store always carry an `_id`; one
    /// without it reads as invalid data.
    pub fn into_post(self) -> Result<Post, StorageError> {
        let id = self
            .id
            .ok_or_else(|| StorageError::InvalidData("post document without _id".to_string()))?;
        Ok(Post {
            id: id.to_hex(),
            title: self.title,
            content: self.content,
            company: self.company,
            location: self.location,
            salary: self.salary,
        })
    }
}

/// Parses a client-supplied identifier into an ObjectId.
///
/// Identifiers the store could not have minted parse as `None`, which
/// callers surface as "not found" rather than an error.
pub fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}
