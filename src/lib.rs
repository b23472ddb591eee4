//! # seo-head
//!
//! Head metadata management library: declares "this page's metadata is X"
//! and reconciles the document head toward it. Covers the page title,
//! descriptive meta tags, Open Graph and Twitter Card tags, canonical and
//! language-alternate links, and JSON-LD structured data.
//!
//! Every operation is an idempotent upsert: repeated calls never
//! accumulate duplicate tags, partial updates never erase previously set
//! keys, and rendering contexts without a live document (a server
//! pre-render pass) degrade to safe no-ops.
//!
//! ## Quick Start
//!
//! ```rust
//! use seo_head::{apply_meta_tags, MetaTagSet};
//!
//! let html = "<html><head></head><body></body></html>";
//! let tags = MetaTagSet {
//!     title: Some("Home".to_string()),
//!     description: Some("Landing page".to_string()),
//!     ..MetaTagSet::default()
//! };
//!
//! let rendered = apply_meta_tags(html, &tags)?;
//! assert!(rendered.contains("<title>Home</title>"));
//! assert!(rendered.contains("og:title"));
//! # Ok::<(), seo_head::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Idempotent upserts**: one tag per key, last write wins
//! - **Partial updates**: absent fields never disturb existing tags
//! - **Singleton links**: canonical, per-locale hreflang, structured data
//! - **Environment safety**: no-ops without a live document
//! - **Audit**: structured presence report for the essential `og:*` tags
//!
//! For repeated updates against one document (the usual case in a
//! rendering pipeline), hold a [`MetadataManager`] instead of calling the
//! one-shot function per change.

mod error;
mod json_ld;
mod manager;
mod options;
mod tags;

/// Head access layer: element descriptions and the accessor seam.
pub mod head;

/// Tag registry layer: title and keyed meta tag primitives.
pub mod registry;

use std::rc::Rc;

use dom_query::Document;

// Public API - re-exports
pub use error::{Error, Result};
pub use head::{DomHead, HeadAccessor, HeadElement};
pub use json_ld::{breadcrumb_list, STRUCTURED_DATA_SELECTOR};
pub use manager::MetadataManager;
pub use options::Options;
pub use registry::{DomRegistry, TagKey, TagRegistry};
pub use tags::{AuditResult, BreadcrumbItem, MetaTagSet, TwitterCardSet};

/// Apply a set of meta tags to an HTML document in one shot.
///
/// Parses `html`, reconciles the head toward `tags`, and returns the
/// re-serialized document. Convenience entry point for server-side
/// post-processing; use [`MetadataManager`] directly to issue several
/// operations against one parsed document.
///
/// # Example
///
/// ```rust
/// use seo_head::{apply_meta_tags, MetaTagSet};
///
/// let rendered = apply_meta_tags(
///     "<html><head></head><body></body></html>",
///     &MetaTagSet {
///         robots: Some("noindex".to_string()),
///         ..MetaTagSet::default()
///     },
/// )?;
/// assert!(rendered.contains(r#"<meta name="robots" content="noindex">"#));
/// # Ok::<(), seo_head::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn apply_meta_tags(html: &str, tags: &MetaTagSet) -> Result<String> {
    let document = Rc::new(Document::from(html));
    let manager = MetadataManager::for_document(&document);
    manager.update_meta_tags(tags)?;
    Ok(document.html().to_string())
}
