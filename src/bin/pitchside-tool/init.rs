use std::fs;
use std::path::Path;

use anyhow::{ensure, Result};
use chrono::Utc;

use pitchside::content::{frontmatter, FrontMatter};
use pitchside::text_utils::post_dir_name;

use crate::InitArgs;

const CONFIG_SAMPLE: &str = r#"[site]
title = "Pitchside"
base_url = "http://localhost:8080"
description = "Cricket previews, match analysis and betting guides"

# Paths are relative to the working directory. Prefix with ${exe_dir}/ to
# resolve them against the executable location instead.
[paths]
template_dir = "templates"
public_dir = "public"
posts_dir = "posts"

[defaults]
post_file_name = "index.mdx"
page_size = 10
feed_size = 20

[server]
address = "0.0.0.0"
port = 8080

# [log]
# level = "Info"
# log_to_console = true
# location = "logs/pitchside.log"
"#;

const INDEX_TPL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{{site_title}}</title></head>
<body>
<h1>{{site_title}}</h1>
<p>{{description}}</p>
<p>{{post_count}} posts published.</p>
<ul>
{{#recent}}  <li><a href="{{link}}">{{title}}</a> <span>{{date}}</span></li>
{{/recent}}</ul>
<p><a href="/blog">All posts</a> &middot; <a href="/rss">RSS</a></p>
</body>
</html>
"#;

const POSTLIST_TPL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{{site_title}} - posts</title></head>
<body>
<h1>Posts</h1>
<ul>
{{#post_list}}  <li>
    <a href="{{link}}">{{title}}</a>
    <span>{{date}}</span>
    <a href="/blog/category/{{category}}">{{category}}</a>
    <p>{{excerpt}}</p>
  </li>
{{/post_list}}</ul>
<p>
{{#categories}}  <a href="/blog/category/{{name}}">{{name}} ({{count}})</a>
{{/categories}}</p>
{{#show_pagination}}<p>
{{#page_list}}  {{#current}}[{{number}}]{{/current}}{{^current}}<a href="/blog?page={{number}}">{{number}}</a>{{/current}}
{{/page_list}}</p>
{{/show_pagination}}</body>
</html>
"#;

const VIEW_TPL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{{title}} - {{site_title}}</title></head>
<body>
<p><a href="/blog">&larr; all posts</a></p>
<h1>{{title}}</h1>
<p>{{date}} &middot; <a href="/blog/category/{{category}}">{{category}}</a></p>
<article>
{{{post_content}}}
</article>
<p>{{#tags}}<span>#{{tag}}</span> {{/tags}}</p>
</body>
</html>
"#;

const WELCOME_SLUG: &str = "welcome-to-pitchside";

const WELCOME_BODY: &str = "# Welcome to Pitchside

This seed post confirms the site is wired up end to end.

## Next steps

* run the server and open the blog listing
* scaffold a real post with the tool
* replace the starter templates with your own markup
";

pub fn init_cmd(args: &InitArgs) -> Result<()> {
    write_site(&args.out_dir)?;
    println!("Wrote a starter site into {}", args.out_dir.display());
    Ok(())
}

pub fn write_site(out_dir: &Path) -> Result<()> {
    let cfg_path = out_dir.join("pitchside.toml");
    ensure!(!cfg_path.exists(), "{} already exists", cfg_path.display());

    let templates = out_dir.join("templates");
    fs::create_dir_all(&templates)?;
    fs::create_dir_all(out_dir.join("public"))?;

    fs::write(&cfg_path, CONFIG_SAMPLE)?;
    fs::write(templates.join("index.tpl"), INDEX_TPL)?;
    fs::write(templates.join("postlist.tpl"), POSTLIST_TPL)?;
    fs::write(templates.join("view.tpl"), VIEW_TPL)?;

    let date = Utc::now().date_naive();
    let post_dir = out_dir.join("posts").join(post_dir_name(&date, WELCOME_SLUG));
    fs::create_dir_all(&post_dir)?;

    let fields = FrontMatter {
        title: Some("Welcome to Pitchside".to_string()),
        slug: Some(WELCOME_SLUG.to_string()),
        date: Some(date.format("%Y-%m-%d").to_string()),
        excerpt: Some("A first post to confirm the site is wired up.".to_string()),
        category: Some("Cricket".to_string()),
        tags: vec!["meta".to_string()],
    };
    fs::write(post_dir.join("index.mdx"), frontmatter::encode(&fields, WELCOME_BODY))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pitchside::config::read_config;
    use pitchside::store::PostStore;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_site_produces_a_loadable_site() {
        let out = TempDir::new().unwrap();
        write_site(out.path()).unwrap();

        let config = read_config(&out.path().join("pitchside.toml")).unwrap();
        assert_eq!(config.site.title, "Pitchside");
        assert_eq!(config.post_file_name(), "index.mdx");
        assert!(out.path().join("templates/view.tpl").is_file());

        let store = PostStore::new(out.path().join("posts"), config.post_file_name());
        let posts = store.list_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, WELCOME_SLUG);

        let post = store.post_by_slug(WELCOME_SLUG).unwrap().unwrap();
        assert_eq!(post.title, "Welcome to Pitchside");
        assert!(post.content.starts_with("# Welcome to Pitchside"));
    }

    #[test]
    fn test_write_site_refuses_to_overwrite() {
        let out = TempDir::new().unwrap();
        write_site(out.path()).unwrap();
        assert!(write_site(out.path()).is_err());
    }
}
