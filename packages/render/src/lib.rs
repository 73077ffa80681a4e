//! # Pageforge Render
//!
//! Turns content blocks into virtual nodes and HTML.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ContentBlockNode (type label + props)       │
//! └─────────────────────────────────────────────┘
//!                     ↓ normalize type
//! ┌─────────────────────────────────────────────┐
//! │ resolution                                  │
//! │  1. runtime registry (per renderer)         │
//! │  2. static many-to-one type table           │
//! │  3. heuristic ladder over the props shape   │
//! │  4. nothing: explicit empty result          │
//! └─────────────────────────────────────────────┘
//!                     ↓ TemplateId
//! ┌─────────────────────────────────────────────┐
//! │ template(props, theme) → VNode → HTML       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Generated documents do not use a fixed vocabulary for types or field
//! names, so resolution is permissive and total: any block either renders
//! through some template or renders as nothing. It never returns an error
//! that would stop the rest of the page.
//!
//! ## Usage
//!
//! ```rust
//! use pageforge_render::{Renderer, TemplateId, Theme};
//! use serde_json::json;
//!
//! let renderer = Renderer::new(Theme::default());
//! let props = json!({ "title": "Welcome", "subtitle": "Shop now" });
//!
//! let resolution = renderer.resolve("", props.as_object().unwrap());
//! assert_eq!(resolution.template, Some(TemplateId::Hero));
//! ```

mod error;
pub mod fields;
pub mod heuristics;
pub mod html;
mod registry;
mod renderer;
mod resolver;
pub mod table;
mod template;
mod templates;
mod theme;
mod vdom;

pub use error::RenderError;
pub use html::HtmlOptions;
pub use registry::RenderRegistry;
pub use renderer::Renderer;
pub use resolver::{Resolution, Resolver, Stage};
pub use template::{Template, TemplateId};
pub use theme::{Colors, Theme};
pub use vdom::VNode;

pub use pageforge_document::normalize_type;
