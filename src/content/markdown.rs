use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref H3_REGEX: Regex = Regex::new(r"(?m)^### (.+)$").unwrap();
    static ref H2_REGEX: Regex = Regex::new(r"(?m)^## (.+)$").unwrap();
    static ref H1_REGEX: Regex = Regex::new(r"(?m)^# (.+)$").unwrap();
    static ref BOLD_REGEX: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref LIST_ITEM_REGEX: Regex = Regex::new(r"(?m)^\* (.+)$").unwrap();
    static ref LIST_BLOCK_REGEX: Regex = Regex::new(r"(?:<li>.+</li>\n?)+").unwrap();
}

// Lines that already carry a block tag from an earlier pass stay out of
// paragraphs.
const BLOCK_PREFIXES: [&str; 4] = ["<h", "<ul", "<li", "</ul"];

/// Converts a constrained markdown subset to an HTML fragment.
///
/// Supported: `#`/`##`/`###` headers, `**bold**`, `*italic*`,
/// `[text](url)` links, and `* ` list items. Each pass is a plain text
/// substitution, applied in a fixed order; there is no parse failure mode.
/// Anything outside the subset (code blocks, tables, nested lists, images)
/// passes through and may render oddly, but never errors.
pub fn to_html(markdown: &str) -> String {
    let html = H3_REGEX.replace_all(markdown, "<h3>${1}</h3>");
    let html = H2_REGEX.replace_all(&html, "<h2>${1}</h2>");
    let html = H1_REGEX.replace_all(&html, "<h1>${1}</h1>");

    let html = BOLD_REGEX.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC_REGEX.replace_all(&html, "<em>${1}</em>");

    let html = LINK_REGEX.replace_all(
        &html,
        "<a href=\"${2}\" target=\"_blank\" rel=\"nofollow noreferrer\">${1}</a>",
    );

    let html = LIST_ITEM_REGEX.replace_all(&html, "<li>${1}</li>");
    let html = LIST_BLOCK_REGEX.replace_all(&html, |caps: &Captures| {
        format!("<ul>{}</ul>", &caps[0])
    });

    let html = wrap_paragraphs(&html);
    html.replace("<p></p>", "")
}

fn wrap_paragraphs(html: &str) -> String {
    let lines: Vec<String> = html
        .lines()
        .map(|line| {
            let is_block = BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix));
            if line.is_empty() || is_block {
                line.to_string()
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_and_bold() {
        let html = to_html("## Hello\n**World**");
        assert!(html.contains("<h2>Hello</h2>"));
        assert!(html.contains("<strong>World</strong>"));
    }

    #[test]
    fn test_header_levels() {
        let html = to_html("# One\n## Two\n### Three");
        assert_eq!(html, "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>");
    }

    #[test]
    fn test_italic_does_not_eat_bold() {
        let html = to_html("**bold** and *leaning*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>leaning</em>"));
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_link_attributes() {
        let html = to_html("[Site](https://example.com)");
        assert_eq!(
            html,
            "<p><a href=\"https://example.com\" target=\"_blank\" rel=\"nofollow noreferrer\">Site</a></p>"
        );
    }

    #[test]
    fn test_list_wrapped_once() {
        let html = to_html("* one\n* two");
        assert_eq!(html, "<ul><li>one</li>\n<li>two</li></ul>");
        assert_eq!(html.matches("<ul>").count(), 1);
        let one = html.find("<li>one</li>").unwrap();
        let two = html.find("<li>two</li>").unwrap();
        assert!(one < two);
    }

    #[test]
    fn test_separate_lists_wrap_separately() {
        let html = to_html("* one\n\n* two");
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn test_bare_lines_become_paragraphs() {
        let html = to_html("First thought.\n\nSecond thought.");
        assert_eq!(html, "<p>First thought.</p>\n\n<p>Second thought.</p>");
    }

    #[test]
    fn test_header_lines_not_wrapped_in_paragraphs() {
        let html = to_html("# Title\nIntro line.");
        assert_eq!(html, "<h1>Title</h1>\n<p>Intro line.</p>");
    }

    #[test]
    fn test_unsupported_input_does_not_panic() {
        // Outside the subset: fenced code, blockquote, image, stray markers.
        let html = to_html("```rust\nlet x = 1;\n```\n> quote\n![alt](img.png)\n**unbalanced");
        assert!(!html.is_empty());
    }

    #[test]
    fn test_full_article_shape() {
        let md = "## Odds\nThe *early* odds favour **Mumbai**.\n\n* toss\n* pitch\n\n[Read more](https://example.com/odds)";
        let html = to_html(md);
        assert!(html.contains("<h2>Odds</h2>"));
        assert!(html.contains("<em>early</em>"));
        assert!(html.contains("<strong>Mumbai</strong>"));
        assert!(html.contains("<ul><li>toss</li>\n<li>pitch</li></ul>"));
        assert!(html.contains("rel=\"nofollow noreferrer\""));
    }
}
