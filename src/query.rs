use std::collections::HashMap;

/// Current page number from a raw query string, `1` when absent or invalid.
pub fn page_param(query: &str) -> u32 {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
    let params: HashMap<String, String> = pairs.into_iter().collect();

    match params.get("page").and_then(|value| value.parse::<u32>().ok()) {
        Some(page) if page > 0 => page,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_param() {
        assert_eq!(page_param("page=3"), 3);
        assert_eq!(page_param("category=Cricket&page=12"), 12);
    }

    #[test]
    fn test_page_param_fallbacks() {
        assert_eq!(page_param(""), 1);
        assert_eq!(page_param("page="), 1);
        assert_eq!(page_param("page=0"), 1);
        assert_eq!(page_param("page=-4"), 1);
        assert_eq!(page_param("page=abc"), 1);
        assert_eq!(page_param("other=value"), 1);
    }
}
