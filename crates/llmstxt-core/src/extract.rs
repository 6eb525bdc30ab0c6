//! Linked-reference extraction from `llms.txt` bodies.
//!
//! A line whose trimmed form starts with `@` references a sub-resource; the
//! rest of the line, trimmed, is its URL.
//!
//! ```rust
//! use llmstxt_core::extract_linked_urls;
//!
//! let body = "# Docs\n@https://example.com/a.md\n  @ https://example.com/b.md \n- [x](y)";
//! assert_eq!(
//!     extract_linked_urls(body),
//!     vec!["https://example.com/a.md", "https://example.com/b.md"],
//! );
//! ```

/// Extract every `@` reference from `content`, in document order.
///
/// A bare `@` with nothing after it is ignored. Callers apply their own limit.
pub fn extract_linked_urls(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|line| line.trim().strip_prefix('@'))
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
