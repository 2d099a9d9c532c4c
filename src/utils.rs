

/// Cuts `s` to at most `max_chars` characters, appending `...` when cut.
#[inline]
pub fn safe_truncate_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_body() {
        assert_eq!(safe_truncate_ellipsis("Not found.", 3), "Not...");
    }

    #[test]
    fn test_truncate_short_body() {
        assert_eq!(safe_truncate_ellipsis("Unauthenticated", 200), "Unauthenticated");
        assert_eq!(safe_truncate_ellipsis("", 5), "");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(safe_truncate_ellipsis("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(safe_truncate_ellipsis("Привет мир", 6), "Привет...");
    }
}
