//! Permissive access to block props.
//!
//! Generated documents name the same thing in many ways (`title`,
//! `headline`, `heading`...). Templates and heuristics ask for a list of
//! candidate keys and take the first usable value. Missing arrays read as
//! empty, missing scalars as `None`.

use pageforge_document::Props;
use serde_json::Value;

pub const TITLE_KEYS: &[&str] = &["title", "headline", "heading"];
pub const SUBTITLE_KEYS: &[&str] = &["subtitle", "subheading", "subheadline", "tagline", "description"];
pub const CONTENT_KEYS: &[&str] = &["content", "text", "body"];
pub const LINK_LIST_KEYS: &[&str] = &["links", "navLinks", "menu", "menuItems", "navItems"];
pub const BRAND_KEYS: &[&str] = &["logo", "logoText", "brand", "brandName", "storeName"];
pub const IMAGE_KEYS: &[&str] = &["image", "imageUrl", "img", "src", "url", "photo"];
pub const BUTTON_TEXT_KEYS: &[&str] = &["buttonText", "ctaText", "buttonLabel", "cta"];
pub const BUTTON_LINK_KEYS: &[&str] = &["buttonLink", "ctaLink", "buttonUrl", "href"];

/// First non-empty scalar under any of `keys`, as text
pub fn text(props: &Props, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| props.get(*key).and_then(scalar_text))
}

/// First non-empty array under any of `keys`; empty if none
pub fn list<'a>(props: &'a Props, keys: &[&str]) -> &'a [Value] {
    keys.iter()
        .find_map(|key| props.get(*key).and_then(Value::as_array).filter(|entries| !entries.is_empty()))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// True if any of `keys` holds an array (even an empty one)
pub fn has_array(props: &Props, keys: &[&str]) -> bool {
    keys.iter().any(|key| matches!(props.get(*key), Some(Value::Array(_))))
}

/// True if any of `keys` is present with a value, whatever its shape.
/// Null and blank strings count as absent.
pub fn has_any(props: &Props, keys: &[&str]) -> bool {
    keys.iter().any(|key| match props.get(*key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    })
}

/// Every array found under `keys`, in key order
pub fn lists<'a>(props: &'a Props, keys: &'a [&'a str]) -> impl Iterator<Item = &'a [Value]> + 'a {
    keys.iter()
        .filter_map(|key| props.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
}

/// True if some object entry in `entries` has any of `keys`
pub fn entries_have(entries: &[Value], keys: &[&str]) -> bool {
    entries.iter().any(|entry| {
        entry
            .as_object()
            .is_some_and(|fields| keys.iter().any(|key| fields.contains_key(*key)))
    })
}

/// True if some object entry has an array under any of `keys`
pub fn entries_have_array(entries: &[Value], keys: &[&str]) -> bool {
    entries.iter().any(|entry| {
        entry
            .as_object()
            .is_some_and(|fields| keys.iter().any(|key| matches!(fields.get(*key), Some(Value::Array(_)))))
    })
}

/// Scalar text of an entry field, for entries that may be plain strings
pub fn entry_text(entry: &Value, keys: &[&str]) -> Option<String> {
    match entry {
        Value::Object(fields) => text(fields, keys),
        other => scalar_text(other),
    }
}

pub fn entry_list<'a>(entry: &'a Value, keys: &[&str]) -> &'a [Value] {
    match entry {
        Value::Object(fields) => list(fields, keys),
        _ => &[],
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        // `cta: { label, href }` style objects
        Value::Object(fields) => text(fields, &["label", "text", "title"]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_takes_first_usable_key() {
        let p = props(json!({ "title": "", "headline": "Big news", "heading": "Other" }));
        assert_eq!(text(&p, TITLE_KEYS), Some("Big news".to_string()));
        assert_eq!(text(&p, CONTENT_KEYS), None);
    }

    #[test]
    fn test_list_is_empty_when_missing_or_wrong_shape() {
        let p = props(json!({ "items": "nope", "links": [1, 2] }));
        assert!(list(&p, &["items"]).is_empty());
        assert_eq!(list(&p, LINK_LIST_KEYS).len(), 2);
    }

    #[test]
    fn test_has_any_checks_presence_not_shape() {
        let p = props(json!({ "logo": { "src": "logo.png" }, "content": ["a", "b"], "title": "  ", "tagline": null }));
        assert!(has_any(&p, BRAND_KEYS));
        assert!(has_any(&p, CONTENT_KEYS));
        assert!(!has_any(&p, TITLE_KEYS));
        assert!(!has_any(&p, SUBTITLE_KEYS));
        // present, but nothing printable
        assert_eq!(text(&p, BRAND_KEYS), None);
    }

    #[test]
    fn test_lists_yields_every_candidate_array() {
        let p = props(json!({ "products": [], "items": [{ "price": 5 }], "extra": [1] }));
        let found: Vec<usize> = lists(&p, &["products", "items", "missing"]).map(<[Value]>::len).collect();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn test_entry_helpers() {
        let entries = vec![json!("plain"), json!({ "price": 3, "features": ["a"] })];
        assert!(entries_have(&entries, &["price"]));
        assert!(entries_have_array(&entries, &["features"]));
        assert!(!entries_have(&entries, &["rating"]));
        assert_eq!(entry_text(&entries[0], &["name"]), Some("plain".to_string()));
    }

    #[test]
    fn test_nested_cta_object_reads_as_text() {
        let p = props(json!({ "cta": { "label": "Buy", "href": "/shop" } }));
        assert_eq!(text(&p, BUTTON_TEXT_KEYS), Some("Buy".to_string()));
    }
}
