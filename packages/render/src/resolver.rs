//! # Template Resolution
//!
//! Picks the template for one block:
//!
//! 1. normalize the type label
//! 2. runtime registry binding for the normalized type
//! 3. static table entry
//! 4. heuristic ladder over the props shape
//!
//! If nothing matches the block resolves to no template and renders as
//! nothing. Resolution never fails and has no side effects.

use crate::heuristics::{self, Shape};
use crate::registry::RenderRegistry;
use crate::table;
use crate::template::TemplateId;
use pageforge_document::{normalize_type, Props};
use serde::Serialize;
use std::fmt;

/// Which step decided the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "stage", content = "rule")]
pub enum Stage {
    Registry,
    Table,
    Heuristic(&'static str),
    Unresolved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Registry => write!(f, "registry"),
            Stage::Table => write!(f, "table"),
            Stage::Heuristic(rule) => write!(f, "heuristic ({})", rule),
            Stage::Unresolved => write!(f, "unresolved"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub normalized: String,
    pub template: Option<TemplateId>,
    pub stage: Stage,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.template.is_none()
    }
}

pub struct Resolver<'a> {
    registry: &'a RenderRegistry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a RenderRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, block_type: &str, props: &Props) -> Resolution {
        let normalized = normalize_type(block_type);

        let (template, stage) = if let Some(bound) = self.registry.lookup(&normalized) {
            (Some(bound.clone()), Stage::Registry)
        } else if let Some(known) = table::static_template(&normalized) {
            (Some(known), Stage::Table)
        } else {
            match heuristics::classify(&Shape::new(&normalized, props)) {
                Some(heuristic) => (Some(heuristic.template.clone()), Stage::Heuristic(heuristic.name)),
                None => (None, Stage::Unresolved),
            }
        };

        Resolution {
            normalized,
            template,
            stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_type_with_title_and_subtitle_is_hero() {
        let registry = RenderRegistry::new();
        let resolution = Resolver::new(&registry).resolve("", &props(json!({ "title": "Welcome", "subtitle": "Shop now" })));

        assert_eq!(resolution.template, Some(TemplateId::Hero));
        assert_eq!(resolution.stage, Stage::Heuristic("hero"));
    }

    #[test]
    fn test_naming_variants_resolve_identically() {
        let registry = RenderRegistry::new();
        let resolver = Resolver::new(&registry);
        let empty = Props::new();

        for label in ["Hero-Split", "hero_split", "herosplit", "HERO SPLIT"] {
            let resolution = resolver.resolve(label, &empty);
            assert_eq!(resolution.normalized, "herosplit");
            assert_eq!(resolution.template, Some(TemplateId::HeroSplit));
            assert_eq!(resolution.stage, Stage::Table);
        }
    }

    #[test]
    fn test_registry_overrides_table() {
        let mut registry = RenderRegistry::new();
        registry.register("Hero", TemplateId::Text);

        let resolution = Resolver::new(&registry).resolve("hero", &Props::new());
        assert_eq!(resolution.template, Some(TemplateId::Text));
        assert_eq!(resolution.stage, Stage::Registry);
    }

    #[test]
    fn test_table_beats_heuristics() {
        let registry = RenderRegistry::new();
        let resolution = Resolver::new(&registry).resolve("footer", &props(json!({ "title": "T", "subtitle": "S" })));
        assert_eq!(resolution.template, Some(TemplateId::Footer));
    }

    #[test]
    fn test_unresolvable_is_empty() {
        let registry = RenderRegistry::new();
        let resolution = Resolver::new(&registry).resolve("widget", &props(json!({ "count": 2 })));
        assert!(resolution.is_empty());
        assert_eq!(resolution.stage, Stage::Unresolved);
        assert_eq!(resolution.stage.to_string(), "unresolved");
    }
}
