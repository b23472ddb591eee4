//! Head metadata reconciliation.
//!
//! [`MetadataManager`] is the single stateful-looking component of the
//! crate, except that it holds no state of its own: the document head is
//! the only store, and every operation reconciles it toward the latest
//! requested value. Repeated calls are idempotent; operations on
//! independent keys commute; operations on the same key are
//! last-write-wins.
//!
//! Every mutating operation checks [`HeadAccessor::is_dom_available`]
//! before touching anything, so the same application code runs unchanged
//! through a server pre-render pass that has no live document.

use std::rc::Rc;

use dom_query::Document;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::head::{css_attr_escape, DomHead, HeadAccessor, HeadElement};
use crate::json_ld::{self, STRUCTURED_DATA_SELECTOR};
use crate::options::Options;
use crate::registry::{DomRegistry, TagKey, TagRegistry};
use crate::tags::{AuditResult, BreadcrumbItem, MetaTagSet, TwitterCardSet};

/// Uniqueness selector for the canonical link.
const CANONICAL_SELECTOR: &str = r#"link[rel="canonical"]"#;

/// Manager for SEO- and sharing-relevant metadata in the document head.
///
/// Generic over its two collaborators so the DOM-availability check and
/// both mutation paths can be substituted in tests. Use
/// [`MetadataManager::for_document`] for the shipped DOM-backed pair and
/// [`MetadataManager::detached`] for rendering contexts without a live
/// document.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use dom_query::Document;
/// use seo_head::{MetadataManager, MetaTagSet};
///
/// let doc = Rc::new(Document::from("<html><head></head><body></body></html>"));
/// let seo = MetadataManager::for_document(&doc);
///
/// seo.update_meta_tags(&MetaTagSet {
///     title: Some("Home".to_string()),
///     ..MetaTagSet::default()
/// })?;
///
/// assert!(doc.select(r#"head meta[property="og:title"]"#).exists());
/// # Ok::<(), seo_head::Error>(())
/// ```
pub struct MetadataManager<H, R> {
    head: H,
    registry: R,
    options: Options,
}

impl MetadataManager<DomHead, DomRegistry> {
    /// Manager over a live parsed document.
    ///
    /// The document is shared; callers keep their `Rc` clone to inspect or
    /// serialize the head afterwards.
    #[must_use]
    pub fn for_document(document: &Rc<Document>) -> Self {
        Self::new(
            DomHead::live(Rc::clone(document)),
            DomRegistry::live(Rc::clone(document)),
        )
    }

    /// Manager for a rendering context with no live document.
    ///
    /// Every operation is a safe no-op; audits report all tags missing.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(DomHead::detached(), DomRegistry::detached())
    }
}

impl<H: HeadAccessor, R: TagRegistry> MetadataManager<H, R> {
    /// Manager over custom collaborators with default options.
    #[must_use]
    pub fn new(head: H, registry: R) -> Self {
        Self::with_options(head, registry, Options::default())
    }

    /// Manager over custom collaborators and explicit options.
    #[must_use]
    pub fn with_options(head: H, registry: R, options: Options) -> Self {
        Self {
            head,
            registry,
            options,
        }
    }

    /// Apply general meta tags and their Open Graph counterparts.
    ///
    /// Only present fields mutate the head:
    /// - `title` sets the document title and `og:title`
    /// - `description` sets `description` and `og:description`
    /// - `keywords`, `author` set their plain tags
    /// - `image_url` sets `og:image`, `url` sets `og:url`
    /// - `robots` delegates to [`set_robots_tag`](Self::set_robots_tag)
    ///
    /// Each key is upserted: existing tags are overwritten in place, so no
    /// duplicates accumulate across repeated calls.
    pub fn update_meta_tags(&self, tags: &MetaTagSet) -> Result<()> {
        if !self.head.is_dom_available() {
            return Ok(());
        }
        let outcome = self.write_meta_tags(tags);
        self.finish("update_meta_tags", outcome)
    }

    /// Apply the Twitter Card tag bundle.
    ///
    /// All five keys (`twitter:card`, `twitter:title`, `twitter:creator`,
    /// `twitter:description`, `twitter:image`) are written unconditionally.
    pub fn set_twitter_tags(&self, tags: &TwitterCardSet) -> Result<()> {
        if !self.head.is_dom_available() {
            return Ok(());
        }
        let outcome = self.write_twitter_tags(tags);
        self.finish("set_twitter_tags", outcome)
    }

    /// Declare the canonical URL of the page.
    ///
    /// Any existing canonical link is removed first; after any number of
    /// calls exactly one `link[rel="canonical"]` remains, carrying the
    /// last URL.
    pub fn set_canonical_url(&self, url: &str) -> Result<()> {
        if !self.head.is_dom_available() {
            return Ok(());
        }
        let link = HeadElement::new("link")
            .attr("rel", "canonical")
            .attr("href", url);
        let outcome = self.upsert_singleton(CANONICAL_SELECTOR, &link);
        self.finish("set_canonical_url", outcome)
    }

    /// Set the robots directive meta tag.
    ///
    /// The content is accepted verbatim; crawlers, not this crate, decide
    /// what a malformed directive means.
    pub fn set_robots_tag(&self, content: &str) -> Result<()> {
        if !self.head.is_dom_available() {
            return Ok(());
        }
        let outcome = self.registry.upsert_tag(&TagKey::Name("robots"), content);
        self.finish("set_robots_tag", outcome)
    }

    /// Declare a locale-specific alternate version of the page.
    ///
    /// At most one alternate link exists per distinct locale; setting a
    /// locale again replaces only that locale's entry and leaves the
    /// other locales untouched.
    pub fn set_hreflang(&self, locale: &str, url: &str) -> Result<()> {
        if !self.head.is_dom_available() {
            return Ok(());
        }
        let selector = format!(
            r#"link[rel="alternate"][hreflang="{}"]"#,
            css_attr_escape(locale)
        );
        let link = HeadElement::new("link")
            .attr("rel", "alternate")
            .attr("hreflang", locale)
            .attr("href", url);
        let outcome = self.upsert_singleton(&selector, &link);
        self.finish("set_hreflang", outcome)
    }

    /// Embed a Schema.org payload as the page's structured data.
    ///
    /// Exactly one `script[type="application/ld+json"]` entry is tracked:
    /// any existing entry is removed, whatever its content, before the new
    /// one is inserted. A payload that cannot be serialized returns
    /// [`Error::Serialization`] under every error policy.
    pub fn set_structured_data<T: Serialize>(&self, schema: &T) -> Result<()> {
        // Serialization failure is a caller bug, worth surfacing even from
        // a pre-render pass, so it is checked ahead of the environment gate.
        let payload = json_ld::to_embeddable_json(schema)?;
        if !self.head.is_dom_available() {
            return Ok(());
        }
        let script = HeadElement::new("script")
            .attr("type", "application/ld+json")
            .text(&payload);
        let outcome = self.upsert_singleton(STRUCTURED_DATA_SELECTOR, &script);
        self.finish("set_structured_data", outcome)
    }

    /// Embed a `BreadcrumbList` built from the given trail.
    ///
    /// Delegates to [`set_structured_data`](Self::set_structured_data) and
    /// therefore replaces any prior structured data, breadcrumb or not.
    pub fn set_breadcrumb_schema(&self, items: &[BreadcrumbItem]) -> Result<()> {
        self.set_structured_data(&json_ld::breadcrumb_list(items))
    }

    /// Probe the head for the essential Open Graph tags.
    ///
    /// Missing tags are reported as warnings on the diagnostic channel;
    /// the returned [`AuditResult`] carries the same presence map for
    /// programmatic use. Without a live document every tag reports
    /// missing.
    pub fn audit_seo(&self) -> AuditResult {
        if !self.head.is_dom_available() {
            tracing::debug!("seo audit skipped: no live document");
            return AuditResult::default();
        }
        AuditResult {
            title: self.probe_essential("title", r#"meta[property="og:title"]"#),
            description: self.probe_essential("description", r#"meta[property="og:description"]"#),
            image: self.probe_essential("image", r#"meta[property="og:image"]"#),
        }
    }

    fn probe_essential(&self, name: &str, selector: &str) -> bool {
        let present = self.head.query_selector(selector).is_some();
        if present {
            tracing::debug!("seo audit: {name} present");
        } else {
            tracing::warn!("missing essential seo tag: {name}");
        }
        present
    }

    fn write_meta_tags(&self, tags: &MetaTagSet) -> Result<()> {
        if let Some(title) = &tags.title {
            self.registry.set_title(title)?;
            self.registry
                .upsert_tag(&TagKey::Property("og:title"), title)?;
        }
        if let Some(description) = &tags.description {
            self.registry
                .upsert_tag(&TagKey::Name("description"), description)?;
            self.registry
                .upsert_tag(&TagKey::Property("og:description"), description)?;
        }
        if let Some(keywords) = &tags.keywords {
            self.registry
                .upsert_tag(&TagKey::Name("keywords"), keywords)?;
        }
        if let Some(author) = &tags.author {
            self.registry.upsert_tag(&TagKey::Name("author"), author)?;
        }
        if let Some(image_url) = &tags.image_url {
            self.registry
                .upsert_tag(&TagKey::Property("og:image"), image_url)?;
        }
        if let Some(url) = &tags.url {
            self.registry.upsert_tag(&TagKey::Property("og:url"), url)?;
        }
        if let Some(robots) = &tags.robots {
            self.set_robots_tag(robots)?;
        }
        Ok(())
    }

    fn write_twitter_tags(&self, tags: &TwitterCardSet) -> Result<()> {
        self.registry
            .upsert_tag(&TagKey::Name("twitter:card"), &tags.card_type)?;
        self.registry
            .upsert_tag(&TagKey::Name("twitter:title"), &tags.title)?;
        self.registry
            .upsert_tag(&TagKey::Name("twitter:creator"), &tags.creator)?;
        self.registry
            .upsert_tag(&TagKey::Name("twitter:description"), &tags.description)?;
        self.registry
            .upsert_tag(&TagKey::Name("twitter:image"), &tags.image)?;
        Ok(())
    }

    /// Remove-then-insert against a uniqueness selector.
    ///
    /// The shared primitive behind canonical, hreflang, and structured
    /// data: clear every match of the selector, then append the new
    /// element. Removing all matches also heals heads that already carried
    /// duplicates before this manager touched them.
    fn upsert_singleton(&self, selector: &str, element: &HeadElement) -> Result<()> {
        self.head.remove_from_head(selector);
        self.head.append_to_head(element)
    }

    /// Apply the error policy at the operation boundary.
    fn finish(&self, operation: &str, outcome: Result<()>) -> Result<()> {
        match outcome {
            Err(Error::Serialization(err)) => Err(Error::Serialization(err)),
            Err(err) if !self.options.propagate_errors => {
                tracing::warn!("{operation} failed: {err}");
                Ok(())
            }
            other => other,
        }
    }
}
