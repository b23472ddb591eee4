//! Data model for head metadata.
//!
//! Tag sets are plain data: the manager reads them and reconciles the
//! document head toward the requested values. Fields of [`MetaTagSet`] are
//! independently optional so that an absent field never disturbs a
//! previously written tag, while [`TwitterCardSet`] is a single atomic
//! bundle written in full on every call.

use serde::{Deserialize, Serialize};

/// General meta tags and their Open Graph counterparts.
///
/// Every field is optional; only present fields cause a mutation. This
/// keeps partial updates safe: setting a description later never erases a
/// title written earlier. An explicitly empty string is still a present
/// value and overwrites the tag with empty content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTagSet {
    /// Document title; also written as `og:title`.
    pub title: Option<String>,

    /// Page description; written as both `description` and `og:description`.
    pub description: Option<String>,

    /// Comma-separated keywords.
    pub keywords: Option<String>,

    /// Author name.
    pub author: Option<String>,

    /// Preview image URL, written as `og:image`.
    pub image_url: Option<String>,

    /// Canonical page URL for sharing, written as `og:url`.
    pub url: Option<String>,

    /// Robots directive (e.g. `index,follow`). The content is passed
    /// through verbatim; no directive grammar is enforced.
    pub robots: Option<String>,
}

/// Twitter Card tags, written unconditionally as one bundle.
///
/// Unlike [`MetaTagSet`], all five keys are upserted on every call; a
/// defaulted field writes empty content for its key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCardSet {
    /// Card type (e.g. `summary_large_image`), written as `twitter:card`.
    pub card_type: String,

    /// Card title, written as `twitter:title`.
    pub title: String,

    /// Content creator handle, written as `twitter:creator`.
    pub creator: String,

    /// Card description, written as `twitter:description`.
    pub description: String,

    /// Card image URL, written as `twitter:image`.
    pub image: String,
}

/// One entry of a navigational breadcrumb trail.
///
/// A sequence of these becomes a Schema.org `BreadcrumbList` with 1-based
/// positions matching the sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Display name of the breadcrumb.
    pub name: String,

    /// URL the breadcrumb points to.
    pub url: String,
}

/// Presence report for the essential Open Graph tags.
///
/// Produced by [`MetadataManager::audit_seo`](crate::MetadataManager::audit_seo)
/// by probing the head; a detached document reports every tag missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditResult {
    /// `meta[property="og:title"]` is present.
    pub title: bool,

    /// `meta[property="og:description"]` is present.
    pub description: bool,

    /// `meta[property="og:image"]` is present.
    pub image: bool,
}

impl AuditResult {
    /// True when every essential tag is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.title && self.description && self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_tag_set_defaults_to_all_absent() {
        let tags = MetaTagSet::default();
        assert!(tags.title.is_none());
        assert!(tags.description.is_none());
        assert!(tags.keywords.is_none());
        assert!(tags.author.is_none());
        assert!(tags.image_url.is_none());
        assert!(tags.url.is_none());
        assert!(tags.robots.is_none());
    }

    #[test]
    fn test_absent_and_empty_are_distinguishable() {
        let absent = MetaTagSet::default();
        let empty = MetaTagSet {
            title: Some(String::new()),
            ..MetaTagSet::default()
        };
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_twitter_card_set_defaults_to_empty_content() {
        let tags = TwitterCardSet::default();
        assert_eq!(tags.card_type, "");
        assert_eq!(tags.image, "");
    }

    #[test]
    fn test_meta_tag_set_from_json() {
        // Page metadata is often declared in configuration; only the keys
        // present in the document should be populated.
        let tags: MetaTagSet = serde_json::from_str(
            r#"{"title": "Home", "description": "Landing page"}"#,
        )
        .unwrap();
        assert_eq!(tags.title.as_deref(), Some("Home"));
        assert_eq!(tags.description.as_deref(), Some("Landing page"));
        assert!(tags.robots.is_none());
    }

    #[test]
    fn test_audit_result_completeness() {
        assert!(!AuditResult::default().is_complete());

        let complete = AuditResult {
            title: true,
            description: true,
            image: true,
        };
        assert!(complete.is_complete());

        let partial = AuditResult {
            title: true,
            description: true,
            image: false,
        };
        assert!(!partial.is_complete());
    }
}
