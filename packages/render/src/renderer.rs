use crate::error::RenderError;
use crate::html::{self, HtmlOptions};
use crate::registry::RenderRegistry;
use crate::resolver::{Resolution, Resolver};
use crate::template::TemplateId;
use crate::templates;
use crate::theme::Theme;
use crate::vdom::VNode;
use pageforge_document::{ContentBlockNode, Document, Props};
use tracing::{debug, warn};

/// Renders blocks through resolution and templates.
///
/// Each renderer owns its registry and theme. Every node renders
/// independently: a block that resolves to nothing or whose template fails
/// produces no output and the rest of the document still renders.
#[derive(Debug, Default)]
pub struct Renderer {
    registry: RenderRegistry,
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            registry: RenderRegistry::new(),
            theme,
        }
    }

    pub fn with_registry(theme: Theme, registry: RenderRegistry) -> Self {
        Self { registry, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &RenderRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RenderRegistry {
        &mut self.registry
    }

    pub fn resolve(&self, block_type: &str, props: &Props) -> Resolution {
        Resolver::new(&self.registry).resolve(block_type, props)
    }

    /// Render a type + props pair, `None` for the explicit empty result
    pub fn render_block(&self, block_type: &str, props: &Props) -> Option<VNode> {
        match self.try_render_block(block_type, props) {
            Ok(node) => node,
            Err(err) => {
                warn!(block_type = %block_type, error = %err, "block failed to render");
                None
            }
        }
    }

    /// Like [`render_block`](Self::render_block) but reports template failures
    pub fn try_render_block(&self, block_type: &str, props: &Props) -> Result<Option<VNode>, RenderError> {
        let resolution = self.resolve(block_type, props);
        let Some(template) = resolution.template else {
            debug!(block_type = %block_type, "no template matched, rendering nothing");
            return Ok(None);
        };

        debug!(block_type = %block_type, template = %template, stage = %resolution.stage, "resolved block");
        let node = self.invoke(&template, props)?;
        Ok(Some(node.with_attr("data-template", template.to_string())))
    }

    pub fn render_node(&self, node: &ContentBlockNode) -> Option<VNode> {
        self.render_block(node.block_type(), node.props())
            .map(|rendered| rendered.with_attr("data-block-id", node.id().as_str()))
    }

    pub fn try_render_node(&self, node: &ContentBlockNode) -> Result<Option<VNode>, RenderError> {
        Ok(self
            .try_render_block(node.block_type(), node.props())?
            .map(|rendered| rendered.with_attr("data-block-id", node.id().as_str())))
    }

    /// Render every node in order, skipping the ones that render nothing
    pub fn render_document(&self, document: &Document) -> Vec<VNode> {
        document.nodes().filter_map(|node| self.render_node(node)).collect()
    }

    /// Rendered document as an HTML fragment
    pub fn to_html(&self, document: &Document, options: &HtmlOptions) -> String {
        html::to_html(&self.render_document(document), options)
    }

    /// Rendered document as a standalone HTML page
    pub fn to_html_page(&self, title: &str, document: &Document, options: &HtmlOptions) -> String {
        html::page(title, &self.render_document(document), &self.theme, options)
    }

    fn invoke(&self, template: &TemplateId, props: &Props) -> Result<VNode, RenderError> {
        if let Some(builtin) = templates::builtin(template) {
            return Ok(builtin(props, &self.theme));
        }

        let name = template.as_str();
        self.registry
            .template(name)
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_string()))?
            .render(props, &self.theme)
    }
}
