//! Tag registry layer.
//!
//! [`TagRegistry`] mirrors the title/meta primitives a host rendering
//! platform exposes: set the document title, upsert one meta tag addressed
//! by its name or property key. [`DomRegistry`] is the shipped
//! implementation over the same shared document the head accessor uses.

use std::rc::Rc;

use dom_query::Document;

use crate::error::{Error, Result};
use crate::head::{css_attr_escape, escape_text, HeadElement};

/// Key of a meta tag: plain tags are addressed by `name`, Open Graph tags
/// by `property`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey<'a> {
    /// `meta[name="…"]` tags (description, keywords, robots, twitter:*).
    Name(&'a str),

    /// `meta[property="…"]` tags (og:*).
    Property(&'a str),
}

impl TagKey<'_> {
    /// Attribute the key lives in (`name` or `property`).
    #[must_use]
    pub fn attr_name(&self) -> &'static str {
        match self {
            TagKey::Name(_) => "name",
            TagKey::Property(_) => "property",
        }
    }

    /// Key value (e.g. `og:title`).
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            TagKey::Name(value) | TagKey::Property(value) => value,
        }
    }

    /// Uniqueness selector matching exactly this key's meta tag.
    #[must_use]
    pub fn selector(&self) -> String {
        format!(
            r#"meta[{}="{}"]"#,
            self.attr_name(),
            css_attr_escape(self.value())
        )
    }
}

/// Title and meta tag primitives of the host document.
///
/// `upsert_tag` is the fundamental idempotency primitive: overwrite the
/// content of an existing tag with the same key, create the tag otherwise.
/// No duplicates ever accumulate for one key.
pub trait TagRegistry {
    /// Set the document title, replacing any existing one.
    fn set_title(&self, title: &str) -> Result<()>;

    /// Create or update the meta tag addressed by `key`.
    fn upsert_tag(&self, key: &TagKey<'_>, content: &str) -> Result<()>;
}

/// [`TagRegistry`] over a parsed [`dom_query::Document`].
///
/// Holds the same `Rc<Document>` as the head accessor so both capabilities
/// reconcile one head. Detached construction makes every operation a
/// guarded no-op.
#[derive(Clone)]
pub struct DomRegistry {
    document: Option<Rc<Document>>,
}

impl DomRegistry {
    /// Registry over a live document.
    #[must_use]
    pub fn live(document: Rc<Document>) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Registry for a rendering context with no live document.
    #[must_use]
    pub fn detached() -> Self {
        Self { document: None }
    }
}

impl TagRegistry for DomRegistry {
    fn set_title(&self, title: &str) -> Result<()> {
        let Some(doc) = &self.document else {
            return Ok(());
        };
        let head = doc.select("head");
        if !head.exists() {
            return Err(Error::missing_head());
        }

        let existing = head.select("title");
        if existing.exists() {
            existing.set_html(escape_text(title).as_str());
        } else {
            head.append_html(HeadElement::new("title").text(title).to_html().as_str());
        }
        Ok(())
    }

    fn upsert_tag(&self, key: &TagKey<'_>, content: &str) -> Result<()> {
        let Some(doc) = &self.document else {
            return Ok(());
        };
        let head = doc.select("head");
        if !head.exists() {
            return Err(Error::missing_head());
        }

        let existing = head.select(key.selector().as_str());
        if existing.exists() {
            existing.set_attr("content", content);
        } else {
            let tag = HeadElement::new("meta")
                .attr(key.attr_name(), key.value())
                .attr("content", content);
            head.append_html(tag.to_html().as_str());
        }
        Ok(())
    }
}
