//! Analysis data model
//!
//! Wire format is camelCase JSON. Optional fields are omitted when unset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Meta tags extracted from one page, keyed by tag name
///
/// Keys are unique; a later insert under the same name replaces the earlier
/// content. Absence of a key means the tag was not found. Keys iterate in
/// sorted order so serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaTagSet(BTreeMap<String, String>);

impl MetaTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tag
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.0.insert(name.into(), content.into());
    }

    /// Raw content for a tag, including empty content
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Content for a tag only when it is non-empty
    pub fn present(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|content| !content.is_empty())
    }

    /// True when the tag exists with non-empty content
    pub fn has(&self, name: &str) -> bool {
        self.present(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetaTagSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = MetaTagSet::new();
        for (name, content) in iter {
            set.insert(name, content);
        }
        set
    }
}

/// Severity of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Error,
    Warning,
    Success,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Error => "error",
            RecommendationType::Warning => "warning",
            RecommendationType::Success => "success",
        }
    }
}

/// One improvement recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    /// Ordered implementation instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    /// 1 is highest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

/// Full result of analyzing one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub meta_tags: MetaTagSet,
    /// Percentage of checklist tags present (0-100)
    pub score: u8,
    pub recommendations: Vec<Recommendation>,
    /// ISO-8601 creation time
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_tag_set_last_insert_wins() {
        let tags: MetaTagSet = [("description", "first"), ("description", "second")]
            .into_iter()
            .collect();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("description"), Some("second"));
    }

    #[test]
    fn test_empty_content_is_not_present() {
        let mut tags = MetaTagSet::new();
        tags.insert("title", "");
        assert_eq!(tags.get("title"), Some(""));
        assert!(!tags.has("title"));
        assert!(!tags.has("robots"));
    }

    #[test]
    fn test_analysis_result_wire_format() {
        let mut meta_tags = MetaTagSet::new();
        meta_tags.insert("og:image", "https://example.com/a.png");

        let result = AnalysisResult {
            url: "https://example.com/".to_string(),
            meta_tags,
            score: 8,
            recommendations: vec![Recommendation {
                kind: RecommendationType::Warning,
                title: "Missing Canonical Tag".to_string(),
                description: "Add one.".to_string(),
                steps: None,
                priority: Some(2),
            }],
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            primary_color: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["metaTags"]["og:image"], "https://example.com/a.png");
        assert_eq!(value["recommendations"][0]["type"], "warning");
        assert_eq!(value["recommendations"][0]["priority"], 2);
        assert!(value["recommendations"][0].get("steps").is_none());
        assert!(value.get("primaryColor").is_none());
    }

    #[test]
    fn test_analysis_result_accepts_client_payload() {
        let payload = json!({
            "url": "https://example.com/",
            "metaTags": {"title": "Example"},
            "score": 8,
            "recommendations": [
                {"type": "error", "title": "t", "description": "d"}
            ],
            "timestamp": "2026-01-01T00:00:00.000Z",
            "primaryColor": "#112233"
        });

        let result: AnalysisResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.meta_tags.get("title"), Some("Example"));
        assert_eq!(result.recommendations[0].kind, RecommendationType::Error);
        assert_eq!(result.recommendations[0].priority, None);
        assert_eq!(result.primary_color.as_deref(), Some("#112233"));
    }
}
