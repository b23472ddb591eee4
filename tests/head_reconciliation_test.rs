use std::rc::Rc;

use dom_query::Document;
use seo_head::{
    apply_meta_tags, BreadcrumbItem, MetaTagSet, MetadataManager, TwitterCardSet,
};

const SHELL: &str = "<html><head></head><body></body></html>";

#[test]
fn one_shot_apply_writes_title_and_open_graph() {
    let tags = MetaTagSet {
        title: Some("Home".to_string()),
        description: Some("Landing page".to_string()),
        ..MetaTagSet::default()
    };

    match apply_meta_tags(SHELL, &tags) {
        Ok(rendered) => {
            assert!(rendered.contains("<title>Home</title>"));
            assert!(rendered.contains(r#"<meta property="og:title" content="Home">"#));
            assert!(rendered.contains(r#"<meta name="description" content="Landing page">"#));
            assert!(rendered.contains(r#"<meta property="og:description" content="Landing page">"#));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn full_page_lifecycle_reconciles_head() {
    let doc = Rc::new(Document::from(SHELL));
    let seo = MetadataManager::for_document(&doc);

    seo.update_meta_tags(&MetaTagSet {
        title: Some("Shop - Example".to_string()),
        description: Some("All our products.".to_string()),
        image_url: Some("https://example.com/shop.jpg".to_string()),
        url: Some("https://example.com/shop".to_string()),
        robots: Some("index,follow".to_string()),
        ..MetaTagSet::default()
    })
    .unwrap();
    seo.set_twitter_tags(&TwitterCardSet {
        card_type: "summary_large_image".to_string(),
        title: "Shop - Example".to_string(),
        creator: "@example".to_string(),
        description: "All our products.".to_string(),
        image: "https://example.com/shop.jpg".to_string(),
    })
    .unwrap();
    seo.set_canonical_url("https://example.com/shop").unwrap();
    seo.set_hreflang("en", "https://example.com/shop").unwrap();
    seo.set_hreflang("de", "https://example.com/de/shop").unwrap();
    seo.set_breadcrumb_schema(&[
        BreadcrumbItem {
            name: "Home".to_string(),
            url: "/".to_string(),
        },
        BreadcrumbItem {
            name: "Shop".to_string(),
            url: "/shop".to_string(),
        },
    ])
    .unwrap();

    assert_eq!(doc.select("head title").length(), 1);
    assert_eq!(doc.select(r#"head link[rel="canonical"]"#).length(), 1);
    assert_eq!(doc.select(r#"head link[rel="alternate"]"#).length(), 2);
    assert_eq!(
        doc.select(r#"head script[type="application/ld+json"]"#).length(),
        1
    );
    assert!(seo.audit_seo().is_complete());
}

#[test]
fn route_change_overwrites_previous_page_metadata() {
    let doc = Rc::new(Document::from(SHELL));
    let seo = MetadataManager::for_document(&doc);

    seo.update_meta_tags(&MetaTagSet {
        title: Some("Home".to_string()),
        description: Some("Landing page".to_string()),
        ..MetaTagSet::default()
    })
    .unwrap();
    seo.set_canonical_url("https://example.com/").unwrap();

    // Navigation: the next page declares its own metadata over the same head.
    seo.update_meta_tags(&MetaTagSet {
        title: Some("About".to_string()),
        description: Some("Who we are".to_string()),
        ..MetaTagSet::default()
    })
    .unwrap();
    seo.set_canonical_url("https://example.com/about").unwrap();

    assert_eq!(doc.select("head title").length(), 1);
    assert_eq!(doc.select("head title").text(), "About".into());
    assert_eq!(doc.select(r#"head meta[property="og:title"]"#).length(), 1);
    assert_eq!(
        doc.select(r#"head meta[property="og:title"]"#).attr("content"),
        Some("About".into())
    );
    let canonical = doc.select(r#"head link[rel="canonical"]"#);
    assert_eq!(canonical.length(), 1);
    assert_eq!(canonical.attr("href"), Some("https://example.com/about".into()));
}

#[test]
fn structured_data_swaps_with_page_type() {
    let doc = Rc::new(Document::from(SHELL));
    let seo = MetadataManager::for_document(&doc);

    seo.set_structured_data(&serde_json::json!({ "@type": "Article", "headline": "A" }))
        .unwrap();
    seo.set_breadcrumb_schema(&[BreadcrumbItem {
        name: "Home".to_string(),
        url: "/".to_string(),
    }])
    .unwrap();
    seo.set_structured_data(&serde_json::json!({ "@type": "Product", "name": "Widget" }))
        .unwrap();

    let scripts = doc.select(r#"head script[type="application/ld+json"]"#);
    assert_eq!(scripts.length(), 1);
    let payload: serde_json::Value = serde_json::from_str(&scripts.text()).unwrap();
    assert_eq!(payload["@type"], "Product");
}

#[test]
fn prerender_pass_is_inert() {
    let seo = MetadataManager::detached();

    seo.update_meta_tags(&MetaTagSet {
        title: Some("Home".to_string()),
        ..MetaTagSet::default()
    })
    .unwrap();
    seo.set_canonical_url("https://example.com/").unwrap();
    seo.set_hreflang("en", "https://example.com/en").unwrap();
    seo.set_structured_data(&serde_json::json!({ "@type": "Article" }))
        .unwrap();

    let audit = seo.audit_seo();
    assert!(!audit.title);
    assert!(!audit.description);
    assert!(!audit.image);
}
