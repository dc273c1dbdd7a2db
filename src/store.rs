use std::path::PathBuf;
use std::{fs, io};

use crate::content::frontmatter;
use crate::content::{Post, PostListItem, DEFAULT_CATEGORY, DEFAULT_TITLE};
use crate::text_utils::today_utc;

/// Flat-file post repository: one directory per post under `root_dir`, each
/// holding a single content document named `post_file`.
///
/// Directory names follow `YYYY-MM-DD-slug-words`; the date prefix makes
/// reverse lexical order equal newest-first order. Every operation re-scans
/// the directory, so results always reflect the disk state.
pub struct PostStore {
    pub root_dir: PathBuf,
    pub post_file: String,
}

impl PostStore {
    pub fn new(root_dir: PathBuf, post_file: &str) -> Self {
        PostStore {
            root_dir,
            post_file: post_file.to_string(),
        }
    }

    /// Immediate subdirectory names of the content root, newest first.
    /// A missing root is an empty store, not an error.
    pub fn list_dirs(&self) -> io::Result<Vec<String>> {
        if !self.root_dir.is_dir() {
            return Ok(vec![]);
        }

        let mut dirs = vec![];
        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                dirs.push(name.to_string());
            }
        }

        dirs.sort_by(|a, b| b.cmp(a));
        Ok(dirs)
    }

    /// Slug derived from a directory name: everything after the three
    /// hyphen-separated date segments. Names with fewer than four segments
    /// yield an empty or truncated slug; such directories simply never match
    /// a real lookup.
    pub fn slug_from_dir_name(name: &str) -> String {
        name.split('-').skip(3).collect::<Vec<_>>().join("-")
    }

    /// Listing records for every directory that holds the content file,
    /// newest first. Header fields fall back to defaults; directories
    /// without the content file are skipped.
    pub fn list_posts(&self) -> io::Result<Vec<PostListItem>> {
        let mut posts = vec![];
        for dir in self.list_dirs()? {
            let Some(raw) = self.read_post_file(&dir) else {
                continue;
            };
            let (fields, _body) = frontmatter::parse(&raw);
            posts.push(PostListItem {
                slug: Self::slug_from_dir_name(&dir),
                title: fields.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                date: fields.date.unwrap_or_else(today_utc),
                excerpt: fields.excerpt.unwrap_or_default(),
                category: fields.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            });
        }
        Ok(posts)
    }

    /// Full post for the first directory whose derived slug matches.
    /// The derived slug is the canonical identifier; the header's declared
    /// `slug` is display metadata kept consistent at write time.
    pub fn post_by_slug(&self, slug: &str) -> io::Result<Option<Post>> {
        for dir in self.list_dirs()? {
            if Self::slug_from_dir_name(&dir) != slug {
                continue;
            }
            let Some(raw) = self.read_post_file(&dir) else {
                continue;
            };
            let (fields, body) = frontmatter::parse(&raw);
            return Ok(Some(Post {
                slug: slug.to_string(),
                title: fields.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                date: fields.date.unwrap_or_else(today_utc),
                excerpt: fields.excerpt.unwrap_or_default(),
                category: fields.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                tags: fields.tags,
                content: body,
            }));
        }
        Ok(None)
    }

    /// First directory whose derived slug matches, used to serve files that
    /// live next to the content document (images and the like).
    pub fn dir_for_slug(&self, slug: &str) -> io::Result<Option<String>> {
        for dir in self.list_dirs()? {
            if Self::slug_from_dir_name(&dir) == slug {
                return Ok(Some(dir));
            }
        }
        Ok(None)
    }

    /// Derived slug of every directory holding the content file, newest
    /// first. No deduplication; duplicates mean duplicate directories.
    pub fn list_slugs(&self) -> io::Result<Vec<String>> {
        let mut slugs = vec![];
        for dir in self.list_dirs()? {
            if self.root_dir.join(&dir).join(&self.post_file).is_file() {
                slugs.push(Self::slug_from_dir_name(&dir));
            }
        }
        Ok(slugs)
    }

    fn read_post_file(&self, dir_name: &str) -> Option<String> {
        let path = self.root_dir.join(dir_name).join(&self.post_file);
        fs::read_to_string(path).ok()
    }
}
