pub mod frontmatter;
pub mod markdown;

/// Title used when a post header does not declare one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Category used when a post header does not declare one.
pub const DEFAULT_CATEGORY: &str = "Cricket";

/// Header fields recognized in a post document. Every field is optional;
/// consumers apply defaults when building display records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// A fully loaded post: header fields with defaults applied, plus the
/// raw markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
}

/// Listing-level record. Same header fields as `Post`, without the body.
#[derive(Debug, Clone, PartialEq)]
pub struct PostListItem {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub category: String,
}
