use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::Post;

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewPage<'a> {
    site_title: &'a str,
    title: &'a str,
    date: &'a str,
    category: &'a str,
    excerpt: &'a str,
    tags: Vec<ViewTag<'a>>,
    post_content: &'a str,
}

/// Renders a single post page through the `view.tpl` template. The body
/// HTML is produced by the markdown pass beforehand and injected unescaped.
pub struct PostRenderer<'a> {
    template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = Template::new(view_tpl_src).map_err(|e| {
            io::Error::new(ErrorKind::InvalidInput, format!("Error parsing view template: {}", e))
        })?;

        Ok(PostRenderer { template })
    }

    pub fn render(&self, site_title: &str, post: &Post, content_html: &str) -> String {
        let tags = post.tags.iter().map(|tag| ViewTag { tag }).collect();

        self.template.render(&ViewPage {
            site_title,
            title: &post.title,
            date: &post.date,
            category: &post.category,
            excerpt: &post.excerpt,
            tags,
            post_content: content_html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_view() {
        let template_src = concat!(
            "TITLE=[{{title}}]\n",
            "DATE=[{{date}}]\n",
            "CATEGORY=[{{category}}]\n",
            "TAGS=[{{#tags}}({{tag}}){{/tags}}]\n",
            "CONTENT=[{{{post_content}}}]",
        );
        let renderer = PostRenderer::new(template_src).unwrap();
        let post = Post {
            slug: "ipl-2025-betting-guide".to_string(),
            title: "IPL 2025 <Betting> Guide".to_string(),
            date: "2025-01-15".to_string(),
            excerpt: "teaser".to_string(),
            category: "Cricket".to_string(),
            tags: vec!["cricket".to_string(), "ipl".to_string()],
            content: String::new(),
        };

        let html = renderer.render("Pitchside", &post, "<h2>Odds</h2>");
        assert_eq!(
            html,
            concat!(
                "TITLE=[IPL 2025 &lt;Betting&gt; Guide]\n",
                "DATE=[2025-01-15]\n",
                "CATEGORY=[Cricket]\n",
                "TAGS=[(cricket)(ipl)]\n",
                "CONTENT=[<h2>Odds</h2>]",
            )
        );
    }
}
