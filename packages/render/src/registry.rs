use crate::template::{Template, TemplateId};
use pageforge_document::normalize_type;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Runtime type bindings and custom templates.
///
/// Owned by a [`Renderer`](crate::Renderer), so two renderers never see each
/// other's registrations. Bindings here take priority over the static table.
#[derive(Default)]
pub struct RenderRegistry {
    bindings: HashMap<String, TemplateId>,
    templates: HashMap<String, Box<dyn Template>>,
}

impl RenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a type key (any spelling) to a template, replacing an earlier
    /// binding for the same normalized key
    pub fn register(&mut self, type_key: &str, template: impl Into<TemplateId>) {
        let normalized = normalize_type(type_key);
        let template = template.into();
        debug!(type_key = %normalized, template = %template, "registered render binding");
        self.bindings.insert(normalized, template);
    }

    /// Add a custom template, addressable as `TemplateId::Custom(name)`
    pub fn register_template(&mut self, name: impl Into<String>, template: Box<dyn Template>) {
        let name = name.into();
        debug!(template = %name, "registered custom template");
        self.templates.insert(name, template);
    }

    /// Binding for an already-normalized type
    pub fn lookup(&self, normalized: &str) -> Option<&TemplateId> {
        self.bindings.get(normalized)
    }

    pub fn template(&self, name: &str) -> Option<&dyn Template> {
        self.templates.get(name).map(Box::as_ref)
    }

    pub fn unregister(&mut self, type_key: &str) -> Option<TemplateId> {
        self.bindings.remove(&normalize_type(type_key))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for RenderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut templates: Vec<_> = self.templates.keys().collect();
        templates.sort();
        f.debug_struct("RenderRegistry")
            .field("bindings", &self.bindings)
            .field("templates", &templates)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::theme::Theme;
    use crate::vdom::VNode;
    use pageforge_document::Props;

    #[test]
    fn test_register_normalizes_key() {
        let mut registry = RenderRegistry::new();
        registry.register("Promo-Strip", TemplateId::CallToAction);

        assert_eq!(registry.lookup("promostrip"), Some(&TemplateId::CallToAction));
        assert_eq!(registry.lookup("Promo-Strip"), None);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut registry = RenderRegistry::new();
        registry.register("hero", TemplateId::Text);
        registry.register("HERO", "hero-split");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("hero"), Some(&TemplateId::HeroSplit));
        assert_eq!(registry.unregister("hero"), Some(TemplateId::HeroSplit));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_custom_templates() {
        let mut registry = RenderRegistry::new();
        registry.register_template(
            "countdown",
            Box::new(|_: &Props, _: &Theme| -> Result<VNode, RenderError> { Ok(VNode::text_element("div", "soon")) }),
        );

        let template = registry.template("countdown").unwrap();
        let node = template.render(&Props::new(), &Theme::default()).unwrap();
        assert_eq!(node.text_content(), "soon");
        assert!(registry.template("other").is_none());
    }
}
