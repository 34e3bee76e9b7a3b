use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};
use tracing::debug;

use crate::errors::AppError;
use crate::models::blog::Blog;
use crate::slug::slugify;

pub const BLOGS_COLL: &str = "blogs";

/// Adapter for the `blogs` collection: insert with slug assignment, lookup
/// by slug, list with optional title search.
#[derive(Clone)]
pub struct BlogStore {
    collection: Collection<Blog>,
}

impl BlogStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(BLOGS_COLL),
        }
    }

    /// Inserts a new blog, deriving its slug from the title and writing the
    /// slug back into `blog` before the insert.
    ///
    /// Rejects titles that cannot be slugified before any store call, and
    /// rejects slugs already present in the collection. The check-then-insert
    /// is not transactional; concurrent inserts racing on the same slug can
    /// both pass the count. The seed loop is the only writer today — a unique
    /// index on `slug` is the fix once an authoring flow exists.
    pub async fn add(&self, blog: &mut Blog) -> Result<(), AppError> {
        let slug = slugify(&blog.title)?;

        let assigned = self.collection.count_documents(doc! { "slug": &slug }).await?;
        if assigned > 0 {
            return Err(AppError::DuplicateSlug(slug));
        }

        debug!(url = %format!("/blogs/{slug}"), "inserting blog");
        blog.slug = slug;
        self.collection.insert_one(&*blog).await?;
        Ok(())
    }

    /// Fetches the blog keyed by `slug`; a missing document is the
    /// not-found error, a driver failure the database error.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Blog, AppError> {
        self.collection
            .find_one(doc! { "slug": slug })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no blog with slug '{slug}'")))
    }

    /// Lists blogs in store-native insertion order, optionally filtered by a
    /// case-insensitive substring match on the title.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Blog>, AppError> {
        let cursor = self.collection.find(Self::title_filter(search)).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Removes every blog document; reseed support.
    pub async fn flush(&self) -> Result<u64, AppError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    /// Builds the find filter for an optional search phrase.
    fn title_filter(search: Option<&str>) -> Document {
        match search {
            Some(phrase) if !phrase.is_empty() => {
                doc! { "title": { "$regex": phrase, "$options": "i" } }
            }
            _ => doc! {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_filter_without_phrase_is_empty() {
        assert!(BlogStore::title_filter(None).is_empty());
        assert!(BlogStore::title_filter(Some("")).is_empty());
    }

    #[test]
    fn test_title_filter_is_case_insensitive_regex() {
        let filter = BlogStore::title_filter(Some("docker"));
        let title = filter.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "docker");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }
}
