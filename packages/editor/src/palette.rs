//! # Block Palette
//!
//! Default props for every block type the palette offers. A block dragged in
//! from the palette starts from one of these templates.
//!
//! Unknown block types are not an error: they keep their requested type label
//! and start from the generic text template, so block types coming from
//! newer external data still insert.

use pageforge_document::{normalize_type, Props};
use serde_json::{json, Value};
use tracing::debug;

/// Block types offered by the palette, in display order
pub const PALETTE_BLOCK_TYPES: &[&str] = &[
    "navigation",
    "hero",
    "features",
    "products",
    "pricing",
    "team",
    "testimonials",
    "gallery",
    "cta",
    "newsletter",
    "text",
    "footer",
];

/// Type used when a palette request names no known template
pub const FALLBACK_BLOCK_TYPE: &str = "text";

/// Default props for `block_type`, falling back to the text template
pub fn default_props(block_type: &str) -> Props {
    let template = match normalize_type(block_type).as_str() {
        "navigation" | "navbar" | "nav" | "header" => json!({
            "logo": "My Store",
            "links": [
                { "label": "Home", "href": "#" },
                { "label": "Shop", "href": "#products" },
                { "label": "Contact", "href": "#contact" }
            ]
        }),
        "hero" | "herosplit" | "banner" => json!({
            "title": "Welcome to our store",
            "subtitle": "Discover products you'll love",
            "buttonText": "Shop now",
            "buttonLink": "#products",
            "image": ""
        }),
        "features" => json!({
            "title": "Why shop with us",
            "items": [
                { "title": "Free shipping", "description": "On every order over $50" },
                { "title": "Easy returns", "description": "30 days, no questions asked" },
                { "title": "Secure checkout", "description": "Your data stays safe" }
            ]
        }),
        "products" | "productgrid" | "catalog" => json!({
            "title": "Featured products",
            "items": [
                { "name": "Product 1", "price": 29.99, "image": "" },
                { "name": "Product 2", "price": 39.99, "image": "" },
                { "name": "Product 3", "price": 49.99, "image": "" }
            ]
        }),
        "pricing" => json!({
            "title": "Plans",
            "plans": [
                { "name": "Basic", "price": 9, "features": ["1 store", "Email support"] },
                { "name": "Pro", "price": 29, "features": ["5 stores", "Priority support"] }
            ]
        }),
        "team" => json!({
            "title": "Meet the team",
            "team": [
                { "name": "Alex Doe", "role": "Founder", "image": "" }
            ]
        }),
        "testimonials" => json!({
            "title": "What customers say",
            "items": [
                { "quote": "Great products and fast delivery.", "author": "Sam", "rating": 5 }
            ]
        }),
        "gallery" => json!({
            "title": "Gallery",
            "images": []
        }),
        "cta" | "calltoaction" => json!({
            "title": "Ready to get started?",
            "buttonText": "Get started",
            "buttonLink": "#"
        }),
        "newsletter" => json!({
            "title": "Stay in the loop",
            "description": "Get news and offers in your inbox",
            "placeholder": "you@example.com",
            "buttonText": "Subscribe"
        }),
        "footer" => json!({
            "companyName": "My Store",
            "links": [
                { "label": "Privacy", "href": "#" },
                { "label": "Terms", "href": "#" }
            ]
        }),
        "text" => text_template(),
        other => {
            debug!(block_type = %other, "no palette template, using text block");
            text_template()
        }
    };

    into_props(template)
}

/// True if `block_type` has its own palette template
pub fn is_known(block_type: &str) -> bool {
    let normalized = normalize_type(block_type);
    PALETTE_BLOCK_TYPES.iter().any(|known| *known == normalized)
        || matches!(
            normalized.as_str(),
            "navbar" | "nav" | "header" | "herosplit" | "banner" | "productgrid" | "catalog" | "calltoaction"
        )
}

fn text_template() -> Value {
    json!({
        "title": "New section",
        "content": "Add your text here."
    })
}

fn into_props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Props::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_type_has_a_template() {
        for block_type in PALETTE_BLOCK_TYPES {
            assert!(is_known(block_type), "{} should be known", block_type);
            assert!(!default_props(block_type).is_empty());
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        assert!(!is_known("hologram"));
        assert_eq!(default_props("hologram"), default_props(FALLBACK_BLOCK_TYPE));
    }

    #[test]
    fn test_lookup_is_normalized() {
        assert_eq!(default_props("Product-Grid"), default_props("products"));
        assert_eq!(default_props("NAV_BAR"), default_props("navigation"));
    }

    #[test]
    fn test_templates_are_fresh_copies() {
        let mut first = default_props("hero");
        first.insert("title".into(), json!("Changed"));
        assert_eq!(default_props("hero")["title"], json!("Welcome to our store"));
    }
}
