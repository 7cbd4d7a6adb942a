//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{NewUser, Role, User, UserStatus};
use crate::repository::UserRepository;

const COLLECTION: &str = "users";

/// Stored shape of a user; the id lives in `_id` as an ObjectId hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    institution_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    document_type: Option<String>,
    document_number: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    email: Option<String>,
    user_name: Option<String>,
    role: Role,
    status: UserStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            institution_id: user.institution_id,
            first_name: user.first_name,
            last_name: user.last_name,
            document_type: user.document_type,
            document_number: user.document_number,
            phone: user.phone,
            address: user.address,
            email: user.email,
            user_name: user.user_name,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            user_id: doc.id,
            institution_id: doc.institution_id,
            first_name: doc.first_name,
            last_name: doc.last_name,
            document_type: doc.document_type,
            document_number: doc.document_number,
            phone: doc.phone,
            address: doc.address,
            email: doc.email,
            user_name: doc.user_name,
            role: doc.role,
            status: doc.status,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Uses the `users` collection of `db`.
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUserRepository::new(client.database("users_db"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<UserDocument>(collection_name),
        }
    }

    /// Creates the secondary indexes used by the lookup operations.
    ///
    /// None of them are unique: duplicate document numbers or user names are
    /// accepted by the service.
    #[instrument(skip(self))]
    pub async fn init_indexes(&self) -> UserResult<()> {
        let indexes = [
            "status",
            "documentNumber",
            "userName",
            "institutionId",
            "role",
        ]
        .into_iter()
        .map(|field| IndexModel::builder().keys(doc! { field: 1 }).build());

        self.collection.create_indexes(indexes).await?;
        tracing::info!(collection = COLLECTION, "User indexes ensured");
        Ok(())
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }

    fn field_filter(field: &str, value: &str) -> Document {
        doc! { field: value }
    }

    fn status_filter(status: UserStatus) -> Document {
        doc! { "status": status.to_string() }
    }

    async fn find_many(&self, filter: Document) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(filter).await?;
        let docs: Vec<UserDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(User::from).collect())
    }

    async fn find_one(&self, filter: Document) -> UserResult<Option<User>> {
        let doc = self.collection.find_one(filter).await?;
        Ok(doc.map(User::from))
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> UserResult<Vec<User>> {
        self.find_many(doc! {}).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        self.find_one(Self::id_filter(id)).await
    }

    #[instrument(skip(self))]
    async fn find_by_status(&self, status: UserStatus) -> UserResult<Vec<User>> {
        self.find_many(Self::status_filter(status)).await
    }

    #[instrument(skip(self))]
    async fn find_by_document_number(&self, document_number: &str) -> UserResult<Option<User>> {
        self.find_one(Self::field_filter("documentNumber", document_number))
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_user_name(&self, user_name: &str) -> UserResult<Option<User>> {
        self.find_one(Self::field_filter("userName", user_name)).await
    }

    #[instrument(skip(self))]
    async fn find_by_institution_id(&self, institution_id: &str) -> UserResult<Vec<User>> {
        self.find_many(Self::field_filter("institutionId", institution_id))
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_role(&self, role: &Role) -> UserResult<Vec<User>> {
        self.find_many(Self::field_filter("role", role.as_str())).await
    }

    #[instrument(skip(self, user))]
    async fn insert(&self, user: NewUser) -> UserResult<User> {
        let user = user.into_user(ObjectId::new().to_hex());
        let doc = UserDocument::from(user.clone());

        self.collection.insert_one(&doc).await?;

        tracing::info!(user_id = %user.user_id, "User inserted");
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_id = %user.user_id))]
    async fn save(&self, user: User) -> UserResult<User> {
        let doc = UserDocument::from(user.clone());

        self.collection
            .replace_one(Self::id_filter(&user.user_id), &doc)
            .upsert(true)
            .await?;

        Ok(user)
    }
}
