use crate::error::RenderError;
use crate::table;
use crate::theme::Theme;
use crate::vdom::VNode;
use pageforge_document::{normalize_type, Props};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a render template.
///
/// Built-in templates are fixed variants; `Custom` names a template added
/// through [`RenderRegistry::register_template`](crate::RenderRegistry::register_template).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    Navigation,
    Hero,
    HeroSplit,
    ProductGrid,
    Pricing,
    Team,
    Testimonials,
    Gallery,
    Newsletter,
    Footer,
    Features,
    CallToAction,
    Text,
    Custom(String),
}

impl TemplateId {
    pub const BUILT_IN: &'static [TemplateId] = &[
        TemplateId::Navigation,
        TemplateId::Hero,
        TemplateId::HeroSplit,
        TemplateId::ProductGrid,
        TemplateId::Pricing,
        TemplateId::Team,
        TemplateId::Testimonials,
        TemplateId::Gallery,
        TemplateId::Newsletter,
        TemplateId::Footer,
        TemplateId::Features,
        TemplateId::CallToAction,
        TemplateId::Text,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TemplateId::Navigation => "navigation",
            TemplateId::Hero => "hero",
            TemplateId::HeroSplit => "hero-split",
            TemplateId::ProductGrid => "product-grid",
            TemplateId::Pricing => "pricing",
            TemplateId::Team => "team",
            TemplateId::Testimonials => "testimonials",
            TemplateId::Gallery => "gallery",
            TemplateId::Newsletter => "newsletter",
            TemplateId::Footer => "footer",
            TemplateId::Features => "features",
            TemplateId::CallToAction => "call-to-action",
            TemplateId::Text => "text",
            TemplateId::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, TemplateId::Custom(_))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses template names in any spelling ("Hero-Split", "hero_split"), and
/// the type aliases of the static table ("cta", "products"). Anything else
/// becomes `Custom` with the name kept as given.
impl FromStr for TemplateId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_type(s);
        let id = TemplateId::BUILT_IN
            .iter()
            .find(|id| normalize_type(id.as_str()) == normalized)
            .cloned()
            .or_else(|| table::static_template(&normalized))
            .unwrap_or_else(|| TemplateId::Custom(s.trim().to_string()));
        Ok(id)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        match s.parse::<TemplateId>() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

impl Serialize for TemplateId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TemplateId::from(name.as_str()))
    }
}

/// A render template: a pure function of a block's props and the theme
pub trait Template: Send + Sync {
    fn render(&self, props: &Props, theme: &Theme) -> Result<VNode, RenderError>;
}

/// Any matching closure is a template
impl<F> Template for F
where
    F: Fn(&Props, &Theme) -> Result<VNode, RenderError> + Send + Sync,
{
    fn render(&self, props: &Props, theme: &Theme) -> Result<VNode, RenderError> {
        self(props, theme)
    }
}
