//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a page in a reference sequence.
///
/// Callers may name pages with small integers or with strings, so both are
/// accepted and echoed back unchanged. The simulator only compares pages
/// for equality; `PageId::Number(1)` and `PageId::Name("1")` are different
/// pages.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page: PageId = serde_json::from_str("7").unwrap();
/// assert_eq!(page, PageId::from(7));
/// assert_eq!(page.to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageId {
    Number(i64),
    Name(String),
}

impl From<i64> for PageId {
    #[inline]
    fn from(id: i64) -> Self {
        PageId::Number(id)
    }
}

impl From<&str> for PageId {
    #[inline]
    fn from(name: &str) -> Self {
        PageId::Name(name.to_string())
    }
}

impl From<String> for PageId {
    #[inline]
    fn from(name: String) -> Self {
        PageId::Name(name)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Number(n) => write!(f, "{}", n),
            PageId::Name(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_from() {
        assert_eq!(PageId::from(42), PageId::Number(42));
        assert_eq!(PageId::from("a"), PageId::Name("a".to_string()));
    }

    #[test]
    fn test_number_and_name_are_distinct() {
        assert_ne!(PageId::from(1), PageId::from("1"));
    }

    #[test]
    fn test_page_id_deserialize_mixed() {
        let pages: Vec<PageId> = serde_json::from_str(r#"[1, "b", 3]"#).unwrap();
        assert_eq!(
            pages,
            vec![PageId::from(1), PageId::from("b"), PageId::from(3)]
        );
    }

    #[test]
    fn test_page_id_serialize_untagged() {
        let json = serde_json::to_string(&vec![PageId::from(4), PageId::from("x")]).unwrap();
        assert_eq!(json, r#"[4,"x"]"#);
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::from(42)), "42");
        assert_eq!(format!("{}", PageId::from("home")), "home");
    }
}
