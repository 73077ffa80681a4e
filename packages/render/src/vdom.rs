use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node produced by templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    /// `<tag>text</tag>`
    pub fn text_element(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self::element(tag).with_child(Self::text(content))
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append `child` only if present
    pub fn with_optional_child(self, child: Option<VNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            VNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            VNode::Text { .. } => &[],
        }
    }

    /// All text content of this subtree, concatenated in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text { content } => out.push_str(content),
            VNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for elements with `tag`
    pub fn find_all<'a>(&'a self, tag: &str, found: &mut Vec<&'a VNode>) {
        if self.tag() == Some(tag) {
            found.push(self);
        }
        for child in self.children() {
            child.find_all(tag, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let node = VNode::element("section")
            .with_class("pf-hero")
            .with_style("color", "red")
            .with_child(VNode::text_element("h1", "Hello"))
            .with_optional_child(None);

        assert_eq!(node.tag(), Some("section"));
        assert_eq!(node.attr("class"), Some("pf-hero"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.text_content(), "Hello");
    }

    #[test]
    fn test_find_all() {
        let node = VNode::element("ul")
            .with_child(VNode::text_element("li", "a"))
            .with_child(VNode::element("li").with_child(VNode::text_element("li", "nested")));

        let mut found = Vec::new();
        node.find_all("li", &mut found);
        assert_eq!(found.len(), 3);
    }
}
