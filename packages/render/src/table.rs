//! Static type table.
//!
//! Many normalized spellings route to the same template, absorbing the naming
//! drift of generated documents. Keys are already normalized (lower-case, no
//! separators).

use crate::template::TemplateId;

const TABLE: &[(&str, TemplateId)] = &[
    ("navigation", TemplateId::Navigation),
    ("navbar", TemplateId::Navigation),
    ("nav", TemplateId::Navigation),
    ("header", TemplateId::Navigation),
    ("menu", TemplateId::Navigation),
    ("topbar", TemplateId::Navigation),
    ("hero", TemplateId::Hero),
    ("herosection", TemplateId::Hero),
    ("banner", TemplateId::Hero),
    ("herobanner", TemplateId::Hero),
    ("jumbotron", TemplateId::Hero),
    ("intro", TemplateId::Hero),
    ("herosplit", TemplateId::HeroSplit),
    ("splithero", TemplateId::HeroSplit),
    ("herowithimage", TemplateId::HeroSplit),
    ("heroimage", TemplateId::HeroSplit),
    ("products", TemplateId::ProductGrid),
    ("productgrid", TemplateId::ProductGrid),
    ("productlist", TemplateId::ProductGrid),
    ("catalog", TemplateId::ProductGrid),
    ("shop", TemplateId::ProductGrid),
    ("featuredproducts", TemplateId::ProductGrid),
    ("collection", TemplateId::ProductGrid),
    ("pricing", TemplateId::Pricing),
    ("pricingtable", TemplateId::Pricing),
    ("plans", TemplateId::Pricing),
    ("pricingplans", TemplateId::Pricing),
    ("team", TemplateId::Team),
    ("ourteam", TemplateId::Team),
    ("teammembers", TemplateId::Team),
    ("staff", TemplateId::Team),
    ("testimonials", TemplateId::Testimonials),
    ("testimonial", TemplateId::Testimonials),
    ("reviews", TemplateId::Testimonials),
    ("customerreviews", TemplateId::Testimonials),
    ("gallery", TemplateId::Gallery),
    ("imagegallery", TemplateId::Gallery),
    ("photos", TemplateId::Gallery),
    ("lookbook", TemplateId::Gallery),
    ("newsletter", TemplateId::Newsletter),
    ("subscribe", TemplateId::Newsletter),
    ("emailsignup", TemplateId::Newsletter),
    ("signup", TemplateId::Newsletter),
    ("footer", TemplateId::Footer),
    ("sitefooter", TemplateId::Footer),
    ("features", TemplateId::Features),
    ("featuregrid", TemplateId::Features),
    ("benefits", TemplateId::Features),
    ("services", TemplateId::Features),
    ("cta", TemplateId::CallToAction),
    ("calltoaction", TemplateId::CallToAction),
    ("ctabanner", TemplateId::CallToAction),
    ("ctasection", TemplateId::CallToAction),
    ("text", TemplateId::Text),
    ("textblock", TemplateId::Text),
    ("richtext", TemplateId::Text),
    ("content", TemplateId::Text),
    ("paragraph", TemplateId::Text),
    ("about", TemplateId::Text),
];

/// Template bound to an already-normalized type in the static table
pub fn static_template(normalized: &str) -> Option<TemplateId> {
    TABLE
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, id)| id.clone())
}

/// Every normalized key the static table knows
pub fn known_types() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(key, _)| *key)
}
