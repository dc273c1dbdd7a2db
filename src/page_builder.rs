use std::collections::HashMap;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Result};
use ntex::web;
use ntex_files::NamedFile;
use ramhorns::Template;

use crate::config::Config;
use crate::content::{markdown, PostListItem};
use crate::paginator::Paginator;
use crate::store::PostStore;
use crate::view::feed_renderer::FeedChannel;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::sitemap_renderer::Sitemap;

#[derive(ramhorns::Content)]
struct IndexPage<'a> {
    site_title: &'a str,
    description: &'a str,
    post_count: usize,
    recent: Vec<RecentEntry<'a>>,
}

#[derive(ramhorns::Content)]
struct RecentEntry<'a> {
    link: String,
    title: &'a str,
    date: &'a str,
}

const RECENT_COUNT: usize = 5;

pub fn read_template(tpl_dir: &Path, file_name: &str) -> io::Result<String> {
    std::fs::read_to_string(tpl_dir.join(file_name))
}

/// Landing page: site blurb plus the most recent posts.
pub fn build_index(store: &PostStore, config: &Config) -> Result<String> {
    let posts = store.list_posts()?;
    let tpl_src = read_template(&config.paths.template_dir, "index.tpl")?;
    let template = Template::new(tpl_src.as_str())?;

    let recent = posts
        .iter()
        .take(RECENT_COUNT)
        .map(|post| RecentEntry {
            link: format!("/blog/{}/", post.slug),
            title: &post.title,
            date: &post.date,
        })
        .collect();

    Ok(template.render(&IndexPage {
        site_title: &config.site.title,
        description: &config.site.description,
        post_count: posts.len(),
        recent,
    }))
}

/// Paginated listing, optionally narrowed to one category. Category counts
/// are taken over the whole store so the sidebar stays stable while
/// filtering.
pub fn build_post_list(
    store: &PostStore,
    config: &Config,
    cur_page: u32,
    category: Option<&str>,
) -> Result<String> {
    let all = store.list_posts()?;

    let mut counts: HashMap<String, u32> = HashMap::new();
    for post in &all {
        *counts.entry(post.category.clone()).or_insert(0) += 1;
    }
    let mut categories: Vec<(String, u32)> = counts.into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let items: Vec<PostListItem> = match category {
        None => all,
        Some(wanted) => all
            .into_iter()
            .filter(|post| post.category.eq_ignore_ascii_case(wanted))
            .collect(),
    };

    let paginator = Paginator::new(&items, config.defaults.page_size.max(1));
    let cur_page = match cur_page {
        0 => 1,
        page if page > paginator.page_count() => 1,
        page => page,
    };
    let page_items = if paginator.page_count() == 0 {
        &[]
    } else {
        paginator.page(cur_page).map_err(|e| anyhow!(e))?
    };

    let tpl_src = read_template(&config.paths.template_dir, "postlist.tpl")?;
    let renderer = ListRenderer::new(&tpl_src)?;
    Ok(renderer.render(
        &config.site.title,
        page_items,
        cur_page,
        paginator.page_count(),
        &categories,
    ))
}

/// Full post page, or `None` when no directory derives the slug.
pub fn build_post_page(store: &PostStore, config: &Config, slug: &str) -> Result<Option<String>> {
    let Some(post) = store.post_by_slug(slug)? else {
        return Ok(None);
    };

    let content_html = markdown::to_html(&post.content);
    let tpl_src = read_template(&config.paths.template_dir, "view.tpl")?;
    let renderer = PostRenderer::new(&tpl_src)?;
    Ok(Some(renderer.render(&config.site.title, &post, &content_html)))
}

pub fn build_feed(store: &PostStore, config: &Config) -> Result<Vec<u8>> {
    let posts = store.list_posts()?;
    let take = (config.feed_size() as usize).min(posts.len());

    let channel = FeedChannel {
        ch_title: &config.site.title,
        ch_link: &config.site.base_url,
        ch_desc: &config.site.description,
    };
    Ok(channel.render(&posts[..take])?)
}

pub fn build_sitemap(store: &PostStore, config: &Config) -> Result<Vec<u8>> {
    let posts = store.list_posts()?;
    let sitemap = Sitemap {
        base_url: &config.site.base_url,
    };
    Ok(sitemap.render(&posts)?)
}

/// Serves a file that lives inside a post or public directory, refusing
/// anything that tries to climb out of it.
pub fn get_file(root_dir: &Path, dir: &str, file: &str) -> Result<NamedFile, web::Error> {
    if dir.contains("..") || file.contains("..") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = root_dir.join(dir).join(file);
    Ok(NamedFile::open(file_path)?)
}
