// src/core/sanitize.rs

/// `None` for blank input, trimmed text otherwise.
pub fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

/// Website as stored: blank or the placeholder link both mean "absent".
pub fn normalize_website(url: &str, placeholder: &str) -> Option<String> {
    non_empty(url).filter(|u| u != placeholder)
}

/// True if `haystack` contains any of `needles`. Callers lower-case first.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_website_is_absent() {
        let ph = "https://www.facebook.com/";
        assert_eq!(normalize_website("https://www.facebook.com/", ph), None);
        assert_eq!(normalize_website("  ", ph), None);
        assert_eq!(
            normalize_website("https://www.facebook.com/tikibar", ph).as_deref(),
            Some("https://www.facebook.com/tikibar")
        );
    }

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("great cocktails", &["beer", "cocktails"]));
        assert!(!contains_any("great food", &["beer", "cocktails"]));
    }
}
