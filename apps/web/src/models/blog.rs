//! Blog documents — the metadata stored per blog. The body of a blog lives
//! in its page template, keyed by the slug; the store only holds what the
//! list page and the page chrome need.

use serde::{Deserialize, Serialize};

/// A reference link shown at the foot of a blog page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRef {
    pub text: String,
    pub link: String,
}

/// The stored blog document. The slug is empty until the store assigns it
/// at insert time; it is never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Cover image path, appears on the blog page and in the list.
    #[serde(rename = "coverimg")]
    pub cover_img: String,
    /// Unique key; also the URL parameter and the page template name.
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(rename = "refs")]
    pub references: Vec<BlogRef>,
    /// Display form of the publish date, e.g. `25-OCT-2016`.
    #[serde(rename = "pubdate")]
    pub pub_date: String,
    /// Location the blog was published from.
    #[serde(rename = "publoc")]
    pub pub_loc: String,
    #[serde(rename = "author")]
    pub author_name: String,
    #[serde(rename = "aboutauthor")]
    pub about_author: String,
    #[serde(rename = "authoremail")]
    pub author_email: String,
}

/// Per-request view model for the blog list page: the (possibly filtered)
/// list plus the flag that shows the clear-search affordance.
#[derive(Debug, Serialize)]
pub struct BlogListResult {
    pub list: Vec<Blog>,
    #[serde(rename = "clearsearch")]
    pub clear_search: bool,
}
