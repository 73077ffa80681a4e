//! Shape-based classification for blocks the tables do not know.
//!
//! The ladder is evaluated top to bottom and the first matching rung wins.
//! A block that fits several rungs (title + subtitle and an images array,
//! say) resolves to the earlier one, so the order below is fixed.

use crate::fields::{self, BRAND_KEYS, LINK_LIST_KEYS, SUBTITLE_KEYS, TITLE_KEYS};
use crate::template::TemplateId;
use crate::templates::collections::{PLAN_LIST_KEYS, PRODUCT_LIST_KEYS, TESTIMONIAL_LIST_KEYS};
use pageforge_document::Props;
use serde_json::Value;

/// What the heuristics look at: the normalized type label and the props
#[derive(Debug, Clone, Copy)]
pub struct Shape<'a> {
    pub normalized_type: &'a str,
    pub props: &'a Props,
}

impl<'a> Shape<'a> {
    pub fn new(normalized_type: &'a str, props: &'a Props) -> Self {
        Self { normalized_type, props }
    }

    fn type_mentions(&self, word: &str) -> bool {
        self.normalized_type.contains(word)
    }
}

/// One rung of the ladder
pub struct Heuristic {
    pub name: &'static str,
    pub template: TemplateId,
    pub matches: fn(&Shape) -> bool,
}

pub static LADDER: &[Heuristic] = &[
    Heuristic {
        name: "navigation",
        template: TemplateId::Navigation,
        matches: |shape| {
            (fields::has_array(shape.props, LINK_LIST_KEYS) && fields::has_any(shape.props, BRAND_KEYS))
                || shape.type_mentions("nav")
        },
    },
    Heuristic {
        name: "hero",
        template: TemplateId::Hero,
        matches: |shape| fields::has_any(shape.props, TITLE_KEYS) && fields::has_any(shape.props, SUBTITLE_KEYS),
    },
    Heuristic {
        name: "catalog",
        template: TemplateId::ProductGrid,
        matches: |shape| {
            fields::lists(shape.props, PRODUCT_LIST_KEYS)
                .any(|entries| fields::entries_have(entries, &["image", "imageUrl", "price"]))
        },
    },
    Heuristic {
        name: "pricing",
        template: TemplateId::Pricing,
        matches: |shape| {
            fields::lists(shape.props, PLAN_LIST_KEYS).any(|entries| fields::entries_have_array(entries, &["features"]))
        },
    },
    Heuristic {
        name: "team",
        template: TemplateId::Team,
        matches: |shape| fields::has_array(shape.props, &["team"]),
    },
    Heuristic {
        name: "testimonials",
        template: TemplateId::Testimonials,
        matches: |shape| {
            fields::lists(shape.props, TESTIMONIAL_LIST_KEYS)
                .any(|entries| fields::entries_have(entries, &["text", "quote", "rating"]))
        },
    },
    Heuristic {
        name: "gallery",
        template: TemplateId::Gallery,
        matches: |shape| fields::has_array(shape.props, &["images"]),
    },
    Heuristic {
        name: "newsletter",
        template: TemplateId::Newsletter,
        matches: |shape| {
            shape.type_mentions("newsletter")
                || shape.props.contains_key("emailPlaceholder")
                || matches!(
                    shape.props.get("placeholder"),
                    Some(Value::String(placeholder))
                        if placeholder.to_lowercase().contains("email") || placeholder.contains('@')
                )
        },
    },
    Heuristic {
        name: "footer",
        template: TemplateId::Footer,
        matches: |shape| {
            shape.type_mentions("footer")
                || ["companyName", "company", "copyright"]
                    .iter()
                    .any(|key| shape.props.contains_key(*key))
        },
    },
    Heuristic {
        name: "text",
        template: TemplateId::Text,
        matches: |shape| {
            fields::has_any(shape.props, &["title", "heading", "content", "text", "body", "subtitle"])
        },
    },
];

/// First matching rung, or `None` if the block has no usable shape
pub fn classify(shape: &Shape) -> Option<&'static Heuristic> {
    LADDER.iter().find(|heuristic| (heuristic.matches)(shape))
}
