//! MongoDB post store implementation.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, ClientSession, Collection};

use postboard_core::posts::{Post, PostDraft, PostId};
use postboard_core::storage::{PostSession, PostStore, Result, StorageError};

use super::conversions::{parse_object_id, PostDocument};
use super::error::map_mongo_error;

const COLLECTION: &str = "posts";

/// MongoDB-based post store.
pub struct MongoPostStore {
    client: Client,
    collection: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connects to MongoDB and binds the posts collection.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on
    /// the first operation rather than here.
    pub async fn connect(url: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await.map_err(map_mongo_error)?;
        let collection = client.database(database).collection(COLLECTION);
        Ok(Self { client, collection })
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn find_post(&self, id: &str) -> Result<Option<Post>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(map_mongo_error)?;

        document.map(PostDocument::into_post).transpose()
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        let mut posts = Vec::new();
        while cursor.advance().await.map_err(map_mongo_error)? {
            let document = cursor.deserialize_current().map_err(map_mongo_error)?;
            posts.push(document.into_post()?);
        }

        Ok(posts)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let document = PostDocument::from_draft(draft);

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StorageError::InvalidData("insert did not return an ObjectId".to_string())
        })?;

        Ok(Post::from_draft(id.to_hex(), draft.clone()))
    }

    async fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Option<Post>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let update = doc! {
            "$set": {
                "title": draft.title.clone(),
                "content": draft.content.clone(),
                "company": draft.company.clone(),
                "location": draft.location.clone(),
                "salary": draft.salary.clone(),
            }
        };

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?;

        document.map(PostDocument::into_post).transpose()
    }

    async fn begin_session(&self) -> Result<Box<dyn PostSession>> {
        let mut session = self.client.start_session().await.map_err(map_mongo_error)?;
        session
            .start_transaction()
            .await
            .map_err(map_mongo_error)?;

        Ok(Box::new(MongoPostSession {
            session,
            collection: self.collection.clone(),
        }))
    }
}

/// Session over the MongoDB post store.
///
/// All reads and writes go through the client session so staged inserts
/// stay invisible to other clients until commit. Dropping the session
/// without committing aborts the transaction server-side.
struct MongoPostSession {
    session: ClientSession,
    collection: Collection<PostDocument>,
}

#[async_trait]
impl PostSession for MongoPostSession {
    async fn find_post(&mut self, id: &str) -> Result<Option<Post>> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        document.map(PostDocument::into_post).transpose()
    }

    async fn stage_create(&mut self, draft: &PostDraft) -> Result<PostId> {
        let document = PostDocument::from_draft(draft);

        let result = self
            .collection
            .insert_one(&document)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StorageError::InvalidData("insert did not return an ObjectId".to_string())
        })?;

        Ok(id.to_hex())
    }

    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.session
            .commit_transaction()
            .await
            .map_err(map_mongo_error)
    }

    async fn abort(mut self: Box<Self>) -> Result<()> {
        self.session
            .abort_transaction()
            .await
            .map_err(map_mongo_error)
    }
}
