//! Head access layer.
//!
//! [`HeadAccessor`] is the seam between the metadata manager and the host
//! document: querying, appending, and removing elements inside the head.
//! [`DomHead`] is the shipped implementation over a [`dom_query::Document`];
//! it can also be constructed *detached* for rendering passes that run
//! without a live document, in which case every operation degrades to a
//! safe no-op and [`HeadAccessor::is_dom_available`] reports `false`.

use std::rc::Rc;

use dom_query::Document;
use tendril::StrTendril;

use crate::error::{Error, Result};

/// Elements that never carry children and close themselves.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text content is raw text, not entity-encoded markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Owned description of a head element.
///
/// Construction is pure data; nothing touches a document until the element
/// is handed to [`HeadAccessor::append_to_head`]. The same type doubles as
/// the snapshot returned by [`HeadAccessor::query_selector`].
///
/// # Example
///
/// ```rust
/// use seo_head::HeadElement;
///
/// let link = HeadElement::new("link")
///     .attr("rel", "canonical")
///     .attr("href", "https://example.com/home");
/// assert_eq!(link.to_html(), r#"<link rel="canonical" href="https://example.com/home">"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    tag_name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
}

impl HeadElement {
    /// Create an element description with the given tag name.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_lowercase(),
            attributes: Vec::new(),
            text: None,
        }
    }

    /// Add or replace an attribute, returning the element for chaining.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Set the text content, returning the element for chaining.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Tag name (lowercase).
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Value of an attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content, if set.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Serialize to an HTML fragment.
    ///
    /// Attribute values and text are entity-encoded; text of raw-text
    /// elements (script, style) is emitted verbatim, so script payloads
    /// must already be embedding-safe.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push('<');
        html.push_str(&self.tag_name);
        for (name, value) in &self.attributes {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_attr(value));
            html.push('"');
        }
        html.push('>');

        if VOID_ELEMENTS.contains(&self.tag_name.as_str()) {
            return html;
        }

        if let Some(text) = &self.text {
            if RAW_TEXT_ELEMENTS.contains(&self.tag_name.as_str()) {
                html.push_str(text);
            } else {
                html.push_str(&escape_text(text));
            }
        }

        html.push_str("</");
        html.push_str(&self.tag_name);
        html.push('>');
        html
    }
}

/// Access to the head section of the host document.
///
/// Implementations must be safe to call in rendering contexts with no live
/// document: `is_dom_available` reports `false` there, queries find
/// nothing, and mutations do nothing. The manager checks availability
/// before every mutating operation, so implementations are never asked to
/// mutate a document they do not have.
pub trait HeadAccessor {
    /// Whether a live, mutable document backs this accessor.
    fn is_dom_available(&self) -> bool;

    /// Snapshot of the first head element matching the selector.
    fn query_selector(&self, selector: &str) -> Option<HeadElement>;

    /// Append an element to the head.
    fn append_to_head(&self, element: &HeadElement) -> Result<()>;

    /// Remove every head element matching the selector.
    ///
    /// Returns the number of elements removed.
    fn remove_from_head(&self, selector: &str) -> usize;
}

/// [`HeadAccessor`] over a parsed [`dom_query::Document`].
///
/// The document is shared via `Rc` so the tag registry can address the same
/// head. `dom_query` mutates through `&Document`, so shared ownership is
/// all that is needed under the single-threaded execution model.
#[derive(Clone)]
pub struct DomHead {
    document: Option<Rc<Document>>,
}

impl DomHead {
    /// Accessor over a live document.
    #[must_use]
    pub fn live(document: Rc<Document>) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Accessor for a rendering context with no live document.
    #[must_use]
    pub fn detached() -> Self {
        Self { document: None }
    }
}

impl HeadAccessor for DomHead {
    fn is_dom_available(&self) -> bool {
        self.document.is_some()
    }

    fn query_selector(&self, selector: &str) -> Option<HeadElement> {
        let doc = self.document.as_ref()?;
        let found = doc.select("head").select_single(selector);
        if !found.exists() {
            return None;
        }

        let node = *found.nodes().first()?;
        // An element node always has a name; anything else snapshots with
        // an empty tag rather than a guessed one.
        let tag = node.node_name().map(|t| t.to_string()).unwrap_or_default();
        let mut element = HeadElement::new(&tag);
        for attr in node.attrs().iter() {
            element = element.attr(&attr.name.local, &attr.value);
        }
        let text: StrTendril = found.text();
        if !text.is_empty() {
            element = element.text(&text);
        }
        Some(element)
    }

    fn append_to_head(&self, element: &HeadElement) -> Result<()> {
        let Some(doc) = &self.document else {
            return Ok(());
        };
        let head = doc.select("head");
        if !head.exists() {
            return Err(Error::missing_head());
        }
        head.append_html(element.to_html().as_str());
        Ok(())
    }

    fn remove_from_head(&self, selector: &str) -> usize {
        let Some(doc) = &self.document else {
            return 0;
        };
        let matches = doc.select("head").select(selector);
        let removed = matches.length();
        if removed > 0 {
            matches.remove();
        }
        removed
    }
}

/// Entity-encode text content.
pub(crate) fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Entity-encode an attribute value.
fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Escape a value for interpolation into a CSS attribute selector.
pub(crate) fn css_attr_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
