use std::fs;

use anyhow::{ensure, Result};
use chrono::{NaiveDate, Utc};

use pitchside::content::{frontmatter, FrontMatter};
use pitchside::text_utils::{post_dir_name, slug_from_title};

use crate::PostArgs;

const STARTER_BODY: &str = "# Replace with your opening heading

Write the article here. The first paragraph doubles as the reader's
introduction, so keep it short.

## A section

* first point
* second point
";

pub fn post_cmd(args: &PostArgs) -> Result<()> {
    let slug = match args.slug {
        Some(ref slug) => slug.clone(),
        None => slug_from_title(&args.title),
    };
    ensure!(!slug.is_empty(), "Could not derive a slug from the title; pass --slug");

    let date = Utc::now().date_naive();
    let dir = args.posts_dir.join(post_dir_name(&date, &slug));
    ensure!(!dir.exists(), "{} already exists", dir.display());

    let doc = build_document(
        &args.title,
        &slug,
        &date,
        args.excerpt.as_deref(),
        &args.category,
        &args.tags,
    );

    fs::create_dir_all(&dir)?;
    let file_path = dir.join(&args.post_file);
    fs::write(&file_path, doc)?;

    println!("Created {}", file_path.display());
    Ok(())
}

// The directory name and the declared slug are written from the same value,
// which keeps lookups by slug honest from the moment a post exists.
fn build_document(
    title: &str,
    slug: &str,
    date: &NaiveDate,
    excerpt: Option<&str>,
    category: &str,
    tags: &[String],
) -> String {
    let fields = FrontMatter {
        title: Some(title.to_string()),
        slug: Some(slug.to_string()),
        date: Some(date.format("%Y-%m-%d").to_string()),
        excerpt: excerpt.map(str::to_string),
        category: Some(category.to_string()),
        tags: tags.to_vec(),
    };
    frontmatter::encode(&fields, STARTER_BODY)
}

#[cfg(test)]
mod tests {
    use pitchside::store::PostStore;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_document_round_trips() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let tags = vec!["cricket".to_string(), "ipl".to_string()];
        let doc = build_document(
            "IPL 2025 Betting Guide",
            "ipl-2025-betting-guide",
            &date,
            Some("A teaser."),
            "Cricket",
            &tags,
        );

        let (fields, body) = frontmatter::parse(&doc);
        assert_eq!(fields.title.as_deref(), Some("IPL 2025 Betting Guide"));
        assert_eq!(fields.slug.as_deref(), Some("ipl-2025-betting-guide"));
        assert_eq!(fields.date.as_deref(), Some("2025-01-15"));
        assert_eq!(fields.excerpt.as_deref(), Some("A teaser."));
        assert_eq!(fields.category.as_deref(), Some("Cricket"));
        assert_eq!(fields.tags, tags);
        assert_eq!(body, STARTER_BODY.trim());
    }

    #[test]
    fn test_scaffolded_post_is_found_by_the_store() {
        let root = TempDir::new().unwrap();
        let args = PostArgs {
            title: "Virat's Ábaco Review".to_string(),
            slug: None,
            category: "Cricket".to_string(),
            excerpt: None,
            tags: vec![],
            posts_dir: root.path().to_path_buf(),
            post_file: "index.mdx".to_string(),
        };

        post_cmd(&args).unwrap();

        let store = PostStore::new(root.path().to_path_buf(), "index.mdx");
        let post = store.post_by_slug("virat-s-abaco-review").unwrap().unwrap();
        assert_eq!(post.title, "Virat's Ábaco Review");

        // Running it again on the same day refuses to clobber the directory.
        assert!(post_cmd(&args).is_err());
    }
}
