use super::{button, container, heading, href_or_anchor, safe_url};
use crate::fields::{self, BRAND_KEYS, BUTTON_LINK_KEYS, BUTTON_TEXT_KEYS, CONTENT_KEYS, IMAGE_KEYS, LINK_LIST_KEYS, SUBTITLE_KEYS, TITLE_KEYS};
use crate::template::TemplateId;
use crate::theme::Theme;
use crate::vdom::VNode;
use pageforge_document::Props;
use serde_json::Value;

const LINK_LABEL_KEYS: &[&str] = &["label", "text", "title", "name"];
const LINK_HREF_KEYS: &[&str] = &["href", "url", "link"];

pub fn navigation(props: &Props, theme: &Theme) -> VNode {
    // `logo: { src, alt }` renders as an image named by its alt text
    let logo = props.get("logo").filter(|logo| logo.is_object());
    let brand = fields::text(props, BRAND_KEYS)
        .or_else(|| logo.and_then(|logo| fields::entry_text(logo, &["alt", "name"])))
        .unwrap_or_else(|| theme.store_name.clone());
    let logo_image = logo
        .and_then(|logo| fields::entry_text(logo, IMAGE_KEYS))
        .and_then(|src| safe_url(&src).map(str::to_string))
        .map(|src| VNode::element("img").with_class("pf-logo").with_attr("src", src).with_attr("alt", brand.as_str()));

    VNode::element("nav")
        .with_class("pf-block pf-navigation")
        .with_style("background", theme.colors.secondary.as_str())
        .with_style("color", "#ffffff")
        .with_optional_child(logo_image)
        .with_child(VNode::text_element("strong", brand).with_class("pf-brand"))
        .with_child(link_list(fields::list(props, LINK_LIST_KEYS)))
}

pub fn hero(props: &Props, theme: &Theme) -> VNode {
    container(&TemplateId::Hero)
        .with_style("background", theme.colors.primary.as_str())
        .with_style("color", "#ffffff")
        .with_style("text-align", "center")
        .with_children(hero_copy(props, theme))
}

/// Hero with copy on one side and an image on the other
pub fn hero_split(props: &Props, theme: &Theme) -> VNode {
    let copy = VNode::element("div").with_class("pf-hero-copy").with_children(hero_copy(props, theme));
    let src = fields::text(props, IMAGE_KEYS).and_then(|src| safe_url(&src).map(str::to_string));
    let image = src.map(|src| {
        VNode::element("img")
            .with_class("pf-hero-image")
            .with_attr("src", src)
            .with_attr("alt", fields::text(props, TITLE_KEYS).unwrap_or_default())
    });

    container(&TemplateId::HeroSplit)
        .with_style("display", "flex")
        .with_style("gap", "2rem")
        .with_child(copy)
        .with_optional_child(image)
}

pub fn newsletter(props: &Props, theme: &Theme) -> VNode {
    let placeholder = fields::text(props, &["emailPlaceholder", "placeholder"])
        .unwrap_or_else(|| "you@example.com".to_string());
    let label = fields::text(props, BUTTON_TEXT_KEYS).unwrap_or_else(|| "Subscribe".to_string());

    let form = VNode::element("form")
        .with_class("pf-newsletter-form")
        .with_child(
            VNode::element("input")
                .with_attr("type", "email")
                .with_attr("placeholder", placeholder),
        )
        .with_child(
            VNode::element("button")
                .with_attr("type", "submit")
                .with_style("background", theme.colors.primary.as_str())
                .with_child(VNode::text(label)),
        );

    container(&TemplateId::Newsletter)
        .with_optional_child(heading(
            "h2",
            Some(fields::text(props, TITLE_KEYS).unwrap_or_else(|| "Subscribe to our newsletter".to_string())),
        ))
        .with_optional_child(heading("p", fields::text(props, SUBTITLE_KEYS)))
        .with_child(form)
}

pub fn footer(props: &Props, theme: &Theme) -> VNode {
    let company = fields::text(props, &["companyName", "company", "storeName", "brand"])
        .unwrap_or_else(|| theme.store_name.clone());
    let copyright = fields::text(props, &["copyright"]).unwrap_or_else(|| format!("© {}", company));

    VNode::element("footer")
        .with_class("pf-block pf-footer")
        .with_style("background", theme.colors.secondary.as_str())
        .with_style("color", "#ffffff")
        .with_child(VNode::text_element("strong", company))
        .with_child(link_list(fields::list(props, &["links", "footerLinks"])))
        .with_child(VNode::text_element("small", copyright))
}

pub fn call_to_action(props: &Props, theme: &Theme) -> VNode {
    let label = fields::text(props, BUTTON_TEXT_KEYS).unwrap_or_else(|| "Get started".to_string());

    container(&TemplateId::CallToAction)
        .with_style("background", theme.colors.accent.as_str())
        .with_style("text-align", "center")
        .with_optional_child(heading("h2", fields::text(props, TITLE_KEYS)))
        .with_optional_child(heading("p", fields::text(props, SUBTITLE_KEYS)))
        .with_child(button(label, fields::text(props, BUTTON_LINK_KEYS), theme))
}

/// Generic fallback: whatever headline and body text the block has
pub fn text(props: &Props, _theme: &Theme) -> VNode {
    // content may be a list of paragraphs
    let paragraphs: Vec<VNode> = match fields::text(props, CONTENT_KEYS) {
        Some(content) => vec![VNode::text_element("p", content)],
        None => fields::list(props, CONTENT_KEYS)
            .iter()
            .filter_map(|paragraph| fields::entry_text(paragraph, &["text", "content", "body"]))
            .map(|paragraph| VNode::text_element("p", paragraph))
            .collect(),
    };

    container(&TemplateId::Text)
        .with_optional_child(heading("h2", fields::text(props, TITLE_KEYS)))
        .with_optional_child(heading("h3", fields::text(props, SUBTITLE_KEYS)))
        .with_children(paragraphs)
}

fn hero_copy(props: &Props, theme: &Theme) -> Vec<VNode> {
    let title = fields::text(props, TITLE_KEYS).unwrap_or_else(|| theme.store_name.clone());

    let mut copy = vec![VNode::text_element("h1", title)];
    copy.extend(heading("p", fields::text(props, SUBTITLE_KEYS)));
    if let Some(label) = fields::text(props, BUTTON_TEXT_KEYS) {
        copy.push(button(label, fields::text(props, BUTTON_LINK_KEYS), theme));
    }
    copy
}

fn link_list(links: &[Value]) -> VNode {
    VNode::element("ul").with_class("pf-links").with_children(links.iter().filter_map(|link| {
        let label = fields::entry_text(link, LINK_LABEL_KEYS)?;
        let href = match link {
            Value::Object(map) => fields::text(map, LINK_HREF_KEYS),
            _ => None,
        };
        Some(VNode::element("li").with_child(
            VNode::element("a")
                .with_attr("href", href_or_anchor(href))
                .with_child(VNode::text(label)),
        ))
    }))
}
