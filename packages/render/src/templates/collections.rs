use super::{container, heading, safe_url};
use crate::fields::{self, IMAGE_KEYS, SUBTITLE_KEYS, TITLE_KEYS};
use crate::template::TemplateId;
use crate::theme::Theme;
use crate::vdom::VNode;
use pageforge_document::Props;
use serde_json::Value;

pub const PRODUCT_LIST_KEYS: &[&str] = &["products", "items"];
pub const PLAN_LIST_KEYS: &[&str] = &["plans", "tiers", "items"];
pub const TESTIMONIAL_LIST_KEYS: &[&str] = &["testimonials", "items", "reviews"];

const NAME_KEYS: &[&str] = &["name", "title", "label"];
const PRICE_KEYS: &[&str] = &["price", "cost", "amount"];

pub fn product_grid(props: &Props, theme: &Theme) -> VNode {
    let cards = fields::list(props, PRODUCT_LIST_KEYS).iter().map(|product| {
        let name = fields::entry_text(product, NAME_KEYS).unwrap_or_else(|| "Untitled product".to_string());
        let price = price_of(product, theme);

        VNode::element("article")
            .with_class("pf-card pf-product")
            .with_optional_child(image(product, &name))
            .with_child(VNode::text_element("h3", name))
            .with_optional_child(price.map(|price| {
                VNode::text_element("span", price)
                    .with_class("pf-price")
                    .with_style("color", theme.colors.primary.as_str())
            }))
    });

    titled(&TemplateId::ProductGrid, props).with_child(grid(cards))
}

pub fn pricing(props: &Props, theme: &Theme) -> VNode {
    let plans = fields::list(props, PLAN_LIST_KEYS).iter().map(|plan| {
        let name = fields::entry_text(plan, NAME_KEYS).unwrap_or_else(|| "Plan".to_string());
        let features = fields::entry_list(plan, &["features"])
            .iter()
            .filter_map(|feature| fields::entry_text(feature, NAME_KEYS))
            .map(|feature| VNode::text_element("li", feature));

        VNode::element("article")
            .with_class("pf-card pf-plan")
            .with_child(VNode::text_element("h3", name))
            .with_optional_child(price_of(plan, theme).map(|price| VNode::text_element("strong", price)))
            .with_child(VNode::element("ul").with_children(features))
    });

    titled(&TemplateId::Pricing, props).with_child(grid(plans))
}

pub fn team(props: &Props, _theme: &Theme) -> VNode {
    let members = fields::list(props, &["team", "members"]).iter().map(|member| {
        let name = fields::entry_text(member, NAME_KEYS).unwrap_or_default();

        VNode::element("article")
            .with_class("pf-card pf-member")
            .with_optional_child(image(member, &name))
            .with_child(VNode::text_element("h3", name))
            .with_optional_child(heading("p", fields::entry_text(member, &["role", "position", "title"])))
    });

    titled(&TemplateId::Team, props).with_child(grid(members))
}

pub fn testimonials(props: &Props, theme: &Theme) -> VNode {
    let quotes = fields::list(props, TESTIMONIAL_LIST_KEYS).iter().map(|entry| {
        let rating = match entry {
            Value::Object(map) => map.get("rating").and_then(Value::as_u64),
            _ => None,
        };

        VNode::element("blockquote")
            .with_class("pf-testimonial")
            .with_optional_child(heading("p", fields::entry_text(entry, &["quote", "text", "content"])))
            .with_optional_child(rating.map(|stars| {
                VNode::text_element("span", "★".repeat(stars.min(5) as usize))
                    .with_class("pf-rating")
                    .with_style("color", theme.colors.accent.as_str())
            }))
            .with_optional_child(heading("cite", fields::entry_text(entry, &["author", "name"])))
    });

    titled(&TemplateId::Testimonials, props).with_children(quotes)
}

pub fn gallery(props: &Props, _theme: &Theme) -> VNode {
    let images = fields::list(props, &["images", "photos"]).iter().filter_map(|entry| {
        let src = fields::entry_text(entry, IMAGE_KEYS)?;
        let src = safe_url(&src)?;
        let alt = fields::entry_text(entry, &["alt", "caption"]).unwrap_or_default();
        Some(VNode::element("img").with_attr("src", src).with_attr("alt", alt))
    });

    titled(&TemplateId::Gallery, props).with_child(grid(images))
}

pub fn features(props: &Props, _theme: &Theme) -> VNode {
    let items = fields::list(props, &["features", "items"]).iter().map(|item| {
        VNode::element("article")
            .with_class("pf-card pf-feature")
            .with_optional_child(heading("h3", fields::entry_text(item, NAME_KEYS)))
            .with_optional_child(heading("p", fields::entry_text(item, &["description", "text", "content"])))
    });

    titled(&TemplateId::Features, props).with_child(grid(items))
}

/// Section with the block's optional title and subtitle
fn titled(id: &TemplateId, props: &Props) -> VNode {
    container(id)
        .with_optional_child(heading("h2", fields::text(props, TITLE_KEYS)))
        .with_optional_child(heading("p", fields::text(props, SUBTITLE_KEYS)))
}

fn grid(cells: impl IntoIterator<Item = VNode>) -> VNode {
    VNode::element("div")
        .with_class("pf-grid")
        .with_style("display", "grid")
        .with_style("grid-template-columns", "repeat(auto-fill, minmax(220px, 1fr))")
        .with_style("gap", "1.5rem")
        .with_children(cells)
}

fn image(entry: &Value, alt: &str) -> Option<VNode> {
    let Value::Object(map) = entry else {
        return None;
    };
    let src = fields::text(map, IMAGE_KEYS)?;
    let src = safe_url(&src)?;
    Some(VNode::element("img").with_attr("src", src).with_attr("alt", alt))
}

fn price_of(entry: &Value, theme: &Theme) -> Option<String> {
    let Value::Object(map) = entry else {
        return None;
    };
    PRICE_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(|price| theme.format_price(price)))
}
