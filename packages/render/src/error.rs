use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("No template registered under '{0}'")]
    UnknownTemplate(String),

    #[error("Template '{template}' failed: {message}")]
    TemplateFailed { template: String, message: String },
}
