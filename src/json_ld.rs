//! JSON-LD structured data construction.
//!
//! Builds Schema.org payloads for embedding into
//! `script[type="application/ld+json"]` head entries, and serializes
//! arbitrary payloads into a form that is safe to inline into a script
//! element.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::tags::BreadcrumbItem;

/// Uniqueness selector for the single tracked structured-data entry.
pub const STRUCTURED_DATA_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Build a Schema.org `BreadcrumbList` from an ordered breadcrumb trail.
///
/// Positions are 1-based and follow input order. The result is a plain
/// JSON value; storage is delegated to
/// [`MetadataManager::set_structured_data`](crate::MetadataManager::set_structured_data).
#[must_use]
pub fn breadcrumb_list(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Serialize a payload for embedding as script element text.
///
/// `</` is emitted as `<\/` (a JSON string escape) so that no string value
/// can terminate the surrounding script element early.
pub fn to_embeddable_json<T: Serialize + ?Sized>(schema: &T) -> Result<String> {
    let serialized = serde_json::to_string(schema)?;
    Ok(serialized.replace("</", "<\\/"))
}
