//! Unified Result Model
//!
//! Every command maps its outcome to this model before rendering output.

use serde::{Deserialize, Serialize};

use crate::core::aggregate::AggregateResult;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Sum,
    Content,
    Error,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Modification time in milliseconds since epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime_ms: Option<i64>,

    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Content hash (XXH3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesumError {
    pub code: String,
    pub message: String,
}

impl FilesumError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A single rendered outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Path as given by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Text shown to the user: the sum expression or the file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Structured payload (the aggregate result for sums)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AggregateResult>,

    /// Metadata
    #[serde(default)]
    pub meta: Meta,

    /// Errors and warnings (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FilesumError>,
}

impl ResultItem {
    /// Create a sum result from an aggregate
    pub fn sum(path: impl Into<String>, result: &AggregateResult) -> Self {
        Self {
            kind: Kind::Sum,
            path: Some(path.into()),
            excerpt: Some(format!("{} = {}", result.display_sum_expr, result.total)),
            data: Some(result.clone()),
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a raw content result
    pub fn content(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: Kind::Content,
            path: Some(path.into()),
            excerpt: Some(content.into()),
            data: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new error result
    pub fn error(error: FilesumError) -> Self {
        Self {
            kind: Kind::Error,
            path: None,
            excerpt: None,
            data: None,
            meta: Meta::default(),
            errors: vec![error],
        }
    }

    /// Set the path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Add an error
    pub fn with_error(mut self, error: FilesumError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }
}

impl From<ResultItem> for ResultSet {
    fn from(item: ResultItem) -> Self {
        Self { items: vec![item] }
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate_text;
    use crate::core::tokenizer::DecimalPolicy;

    fn sample() -> AggregateResult {
        aggregate_text("1 2 3", DecimalPolicy::Skip).unwrap()
    }

    #[test]
    fn test_result_item_sum() {
        let item = ResultItem::sum("nums.txt", &sample());
        assert_eq!(item.kind, Kind::Sum);
        assert_eq!(item.path, Some("nums.txt".to_string()));
        assert_eq!(item.excerpt, Some("1 + 2 + 3 = 6".to_string()));
        assert!(item.data.is_some());
    }

    #[test]
    fn test_result_item_json_round_trip() {
        let item = ResultItem::sum("nums.txt", &sample());
        let json = serde_json::to_string(&item).unwrap();
        let back: ResultItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data, Some(sample()));
    }

    #[test]
    fn test_wide_total_serializes_exactly() {
        let big = u64::MAX.to_string();
        let result = aggregate_text(&format!("{} {}", big, big), DecimalPolicy::Skip).unwrap();
        let json = serde_json::to_string(&ResultItem::sum("big.txt", &result)).unwrap();
        assert!(json.contains("\"total\":36893488147419103230"));
    }

    #[test]
    fn test_result_item_content() {
        let item = ResultItem::content("doc.txt", "hello\nworld");
        assert_eq!(item.kind, Kind::Content);
        assert_eq!(item.excerpt, Some("hello\nworld".to_string()));
        assert!(item.data.is_none());
    }

    #[test]
    fn test_result_item_error() {
        let item = ResultItem::error(FilesumError::new("ERR001", "Something went wrong"))
            .with_path("a.txt");
        assert_eq!(item.kind, Kind::Error);
        assert_eq!(item.path, Some("a.txt".to_string()));
        assert_eq!(item.errors.len(), 1);
        assert_eq!(item.errors[0].code, "ERR001");
        assert_eq!(item.errors[0].message, "Something went wrong");
    }

    #[test]
    fn test_result_item_with_meta() {
        let meta = Meta {
            mtime_ms: Some(12345),
            size: Some(1024),
            hash: Some("abc123".to_string()),
        };
        let item = ResultItem::content("test.txt", "").with_meta(meta);
        assert_eq!(item.meta.mtime_ms, Some(12345));
        assert_eq!(item.meta.size, Some(1024));
    }

    #[test]
    fn test_kind_serialization() {
        let item = ResultItem::content("test.txt", "x");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"kind\":\"content\""));
        assert!(!json.contains("\"errors\""));
    }

    #[test]
    fn test_sum_data_embedded_as_object() {
        let item = ResultItem::sum("nums.txt", &sample());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"data\":{"));
        assert!(json.contains("\"display_list\":\"1, 2, 3\""));
    }

    #[test]
    fn test_result_item_deserialization() {
        let json = r#"{"kind":"error","errors":[{"code":"NO_VALID_NUMBERS","message":"No valid numbers found."}]}"#;
        let item: ResultItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, Kind::Error);
        assert_eq!(item.errors[0].code, "NO_VALID_NUMBERS");
    }

    #[test]
    fn test_result_set_from_item() {
        let set = ResultSet::from(ResultItem::content("a.txt", "a"));
        assert_eq!(set.items.len(), 1);

        let items: Vec<_> = set.into_iter().collect();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_result_set_default() {
        let mut set = ResultSet::default();
        assert!(set.items.is_empty());
        set.push(ResultItem::content("a.txt", "a"));
        assert_eq!(set.items.len(), 1);
    }
}
