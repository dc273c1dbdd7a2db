use chrono::{NaiveDate, Utc};

/// Today's calendar date in the `YYYY-MM-DD` form used by post headers.
pub fn today_utc() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Directory name for a post: date prefix plus slug, `YYYY-MM-DD-the-slug`.
pub fn post_dir_name(date: &NaiveDate, slug: &str) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), slug)
}

/// Turns a post title into a URL-safe slug: transliterate to ASCII, keep
/// letters and digits, hyphenate the rest, collapse runs.
pub fn slug_from_title(title: &str) -> String {
    let ascii = unidecode::unidecode(title);

    let mut slug = String::with_capacity(ascii.len());
    let mut prev_hyphen = true; // also swallows leading separators
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_title() {
        assert_eq!(
            slug_from_title("IPL 2025 Betting Guide: Odds & Tips"),
            "ipl-2025-betting-guide-odds-tips"
        );
        assert_eq!(slug_from_title("Virat's Ábaco  --  review"), "virat-s-abaco-review");
        assert_eq!(slug_from_title("  "), "");
    }

    #[test]
    fn test_post_dir_name() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(
            post_dir_name(&date, "ipl-2025-betting-guide"),
            "2025-01-15-ipl-2025-betting-guide"
        );
    }

    #[test]
    fn test_today_utc_shape() {
        let today = today_utc();
        assert_eq!(today.len(), 10);
        assert_eq!(today.matches('-').count(), 2);
    }
}
