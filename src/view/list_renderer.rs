use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::PostListItem;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    site_title: &'a str,
    post_list: Vec<ListEntry<'a>>,
    categories: Vec<CategoryEntry<'a>>,
    page_list: Vec<PageLink>,
    show_pagination: bool,
}

#[derive(ramhorns::Content)]
struct ListEntry<'a> {
    link: String,
    title: &'a str,
    date: &'a str,
    excerpt: &'a str,
    category: &'a str,
}

#[derive(ramhorns::Content)]
struct CategoryEntry<'a> {
    name: &'a str,
    count: u32,
}

#[derive(ramhorns::Content)]
struct PageLink {
    current: bool,
    number: u32,
}

/// Renders the paginated blog listing through the `postlist.tpl` template.
pub struct ListRenderer<'a> {
    template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = Template::new(list_tpl_src).map_err(|e| {
            io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e))
        })?;

        Ok(ListRenderer { template })
    }

    pub fn render(
        &self,
        site_title: &str,
        items: &[PostListItem],
        cur_page: u32,
        page_count: u32,
        categories: &[(String, u32)],
    ) -> String {
        let post_list = items
            .iter()
            .map(|item| ListEntry {
                link: format!("/blog/{}/", item.slug),
                title: &item.title,
                date: &item.date,
                excerpt: &item.excerpt,
                category: &item.category,
            })
            .collect();

        let page_list = (1..=page_count)
            .map(|number| PageLink {
                current: number == cur_page,
                number,
            })
            .collect();

        let categories = categories
            .iter()
            .map(|(name, count)| CategoryEntry {
                name: name.as_str(),
                count: *count,
            })
            .collect();

        self.template.render(&ListPage {
            site_title,
            post_list,
            categories,
            page_list,
            show_pagination: page_count > 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slug: &str, title: &str, category: &str) -> PostListItem {
        PostListItem {
            slug: slug.to_string(),
            title: title.to_string(),
            date: "2025-01-15".to_string(),
            excerpt: "A short teaser.".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_render_list() {
        let template_src = concat!(
            "{{site_title}}\n",
            "{{#post_list}}[{{link}}|{{title}}|{{date}}|{{category}}]{{/post_list}}\n",
            "{{#categories}}({{name}}:{{count}}){{/categories}}\n",
            "{{#show_pagination}}{{#page_list}}{{#current}}*{{/current}}{{number}} {{/page_list}}{{/show_pagination}}",
        );
        let renderer = ListRenderer::new(template_src).unwrap();
        let items = [
            item("ipl-2025-betting-guide", "IPL 2025", "Cricket"),
            item("online-gaming-trends", "Gaming Trends", "Gaming"),
        ];
        let categories = [("Cricket".to_string(), 1), ("Gaming".to_string(), 1)];

        let html = renderer.render("Pitchside", &items, 2, 3, &categories);
        assert!(html.starts_with("Pitchside\n"));
        assert!(html.contains("[/blog/ipl-2025-betting-guide/|IPL 2025|2025-01-15|Cricket]"));
        assert!(html.contains("(Cricket:1)(Gaming:1)"));
        assert!(html.contains("1 *2 3"));
    }

    #[test]
    fn test_single_page_hides_pagination() {
        let renderer =
            ListRenderer::new("{{#show_pagination}}PAGES{{/show_pagination}}").unwrap();
        let html = renderer.render("Pitchside", &[], 1, 1, &[]);
        assert!(!html.contains("PAGES"));
    }
}
