//! Post domain types.

use serde::{Deserialize, Serialize};

/// Store-assigned opaque post identifier.
///
/// The document store mints identifiers on insert; callers never supply
/// them. Lookups with an identifier the store could not have minted are
/// answered with "absent" rather than an error.
pub type PostId = String;

/// A job post held in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub company: String,
    pub location: String,
    pub salary: String,
}

/// The storable fields of a post, without an identifier.
///
/// Doubles as the create/update request payload and as the staged copy
/// during a repost; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub company: String,
    pub location: String,
    pub salary: String,
}

impl Post {
    /// Builds a post from a store-assigned identifier and a draft.
    pub fn from_draft(id: PostId, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            company: draft.company,
            location: draft.location,
            salary: draft.salary,
        }
    }
}

impl From<Post> for PostDraft {
    /// Copies every field except the identifier.
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            content: post.content,
            company: post.company,
            location: post.location,
            salary: post.salary,
        }
    }
}
