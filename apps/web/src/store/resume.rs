use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::errors::AppError;
use crate::models::resume::Resume;

pub const RESUME_COLL: &str = "resume";

/// Adapter for the `resume` collection. No uniqueness enforcement beyond
/// the store's own primary key; the document is addressed by its external
/// `id` field.
#[derive(Clone)]
pub struct ResumeStore {
    collection: Collection<Resume>,
}

impl ResumeStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(RESUME_COLL),
        }
    }

    pub async fn add(&self, resume: &Resume) -> Result<(), AppError> {
        self.collection.insert_one(resume).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Resume, AppError> {
        self.collection
            .find_one(doc! { "id": id })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no profile with id '{id}'")))
    }

    /// Removes every resume document; reseed support.
    pub async fn flush(&self) -> Result<u64, AppError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
