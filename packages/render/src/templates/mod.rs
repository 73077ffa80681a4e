//! Built-in templates.
//!
//! Every template is a plain function of `(props, theme)`. They never fail:
//! missing arrays render as empty lists and missing scalars fall back to a
//! default, so a half-filled generated block still produces something.

pub(crate) mod collections;
mod sections;

use crate::template::TemplateId;
use crate::theme::Theme;
use crate::vdom::VNode;
use pageforge_document::Props;

pub type BuiltinFn = fn(&Props, &Theme) -> VNode;

/// Built-in template function for `id`, `None` for custom templates
pub fn builtin(id: &TemplateId) -> Option<BuiltinFn> {
    let template: BuiltinFn = match id {
        TemplateId::Navigation => sections::navigation,
        TemplateId::Hero => sections::hero,
        TemplateId::HeroSplit => sections::hero_split,
        TemplateId::ProductGrid => collections::product_grid,
        TemplateId::Pricing => collections::pricing,
        TemplateId::Team => collections::team,
        TemplateId::Testimonials => collections::testimonials,
        TemplateId::Gallery => collections::gallery,
        TemplateId::Newsletter => sections::newsletter,
        TemplateId::Footer => sections::footer,
        TemplateId::Features => collections::features,
        TemplateId::CallToAction => sections::call_to_action,
        TemplateId::Text => sections::text,
        TemplateId::Custom(_) => return None,
    };
    Some(template)
}

/// Outer `<section>` every template starts from
fn container(id: &TemplateId) -> VNode {
    VNode::element("section").with_class(format!("pf-block pf-{}", id))
}

fn heading(tag: &str, text: Option<String>) -> Option<VNode> {
    text.map(|text| VNode::text_element(tag, text))
}

fn button(label: String, href: Option<String>, theme: &Theme) -> VNode {
    VNode::element("a")
        .with_class("pf-button")
        .with_attr("href", href_or_anchor(href))
        .with_style("background", theme.colors.primary.as_str())
        .with_style("color", "#ffffff")
        .with_child(VNode::text(label))
}

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// `raw` trimmed, if it is a relative reference or uses an allowed scheme.
///
/// Browsers drop tabs and newlines inside URLs, so the scheme is read with
/// those removed ("java\tscript:" is still `javascript`).
pub(crate) fn safe_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    let compact: String = url.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_control()).collect();
    let scheme_end = compact.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(end) if compact[end..].starts_with(':') => {
            let scheme = compact[..end].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str()).then_some(url)
        }
        _ => Some(url),
    }
}

/// Link target for an `href`, `#` when missing or unsafe
fn href_or_anchor(href: Option<String>) -> String {
    href.as_deref()
        .and_then(safe_url)
        .unwrap_or("#")
        .to_string()
}
