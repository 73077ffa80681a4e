//! # HTML Serialization
//!
//! Turns rendered virtual nodes into markup for previews and static export.

use crate::theme::Theme;
use crate::vdom::VNode;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Serialize a list of nodes
pub fn to_html(nodes: &[VNode], options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    for node in nodes {
        write_node(node, &mut ctx);
    }
    ctx.buffer
}

/// Serialize nodes as a complete standalone page
pub fn page(title: &str, nodes: &[VNode], theme: &Theme, options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line(&format!(
        "<body style=\"{}\">",
        escape_html(&style_string(theme.page_styles()))
    ));
    ctx.indent();
    for node in nodes {
        write_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.buffer
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
        }
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            let mut open = format!("<{}", tag);
            for (name, value) in attributes {
                open.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
            if !styles.is_empty() {
                let inline = style_string(styles.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                open.push_str(&format!(" style=\"{}\"", escape_html(&inline)));
            }

            if children.is_empty() && is_self_closing(tag) {
                open.push_str(" />");
                ctx.add_line(&open);
                return;
            }

            // Single text child stays on one line
            if let [VNode::Text { content }] = children.as_slice() {
                ctx.add_line(&format!("{}>{}</{}>", open, escape_html(content), tag));
                return;
            }

            open.push('>');
            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                write_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }
    }
}

fn style_string<'a>(styles: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    styles
        .into_iter()
        .map(|(key, value)| format!("{}: {};", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "source" | "wbr"
    )
}
