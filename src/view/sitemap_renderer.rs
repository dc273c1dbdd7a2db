use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::content::PostListItem;
use crate::view::feed_renderer::post_link;

// Fixed routes listed next to the posts. The landing page carries the top
// priority, everything else the crawler default for section pages.
const STATIC_ROUTES: [(&str, &str); 2] = [("", "1.0"), ("/blog", "0.8")];

/// Writes the sitemap for search engine crawlers: the fixed site routes plus
/// one entry per stored post slug.
pub struct Sitemap<'a> {
    pub base_url: &'a str,
}

impl<'a> Sitemap<'a> {
    pub fn render(&self, posts: &[PostListItem]) -> quick_xml::Result<Vec<u8>> {
        let base = self.base_url.trim_end_matches('/');
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"));
        writer.write_event(Event::Start(urlset))?;

        for (path, priority) in STATIC_ROUTES {
            self.push_url(&mut writer, &format!("{}{}", base, path), None, "weekly", priority)?;
        }

        for post in posts {
            let loc = post_link(base, &post.slug);
            self.push_url(&mut writer, &loc, Some(&post.date), "monthly", "0.6")?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;
        Ok(writer.into_inner().into_inner())
    }

    fn push_url(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        loc: &str,
        lastmod: Option<&str>,
        changefreq: &str,
        priority: &str,
    ) -> quick_xml::Result<()> {
        writer.write_event(Event::Start(BytesStart::new("url")))?;

        push_text(writer, "loc", loc)?;
        if let Some(lastmod) = lastmod {
            push_text(writer, "lastmod", lastmod)?;
        }
        push_text(writer, "changefreq", changefreq)?;
        push_text(writer, "priority", priority)?;

        writer.write_event(Event::End(BytesEnd::new("url")))?;
        Ok(())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str;

    use super::*;

    #[test]
    fn test_render_sitemap() {
        let posts = [PostListItem {
            slug: "ipl-2025-betting-guide".to_string(),
            title: "IPL 2025".to_string(),
            date: "2025-01-15".to_string(),
            excerpt: String::new(),
            category: "Cricket".to_string(),
        }];
        let sitemap = Sitemap {
            base_url: "https://example.com/",
        };

        let xml = sitemap.render(&posts).unwrap();
        assert_eq!(str::from_utf8(&xml).unwrap(), EXPECTED);
    }

    const EXPECTED: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\
<url><loc>https://example.com</loc><changefreq>weekly</changefreq><priority>1.0</priority></url>\
<url><loc>https://example.com/blog</loc><changefreq>weekly</changefreq><priority>0.8</priority></url>\
<url><loc>https://example.com/blog/ipl-2025-betting-guide/</loc>\
<lastmod>2025-01-15</lastmod>\
<changefreq>monthly</changefreq><priority>0.6</priority></url>\
</urlset>";
}
