use serde::{Deserialize, Serialize};

/// Shared visual configuration handed to every template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub colors: Colors,
    pub font_family: String,

    /// Fallback brand name when a block carries none
    pub store_name: String,

    /// Prefix for numeric prices
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: "#3366ff".to_string(),
            secondary: "#1f2937".to_string(),
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            accent: "#f59e0b".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Colors::default(),
            font_family: "system-ui, sans-serif".to_string(),
            store_name: "My Store".to_string(),
            currency: "$".to_string(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline styles for the page body
    pub fn page_styles(&self) -> Vec<(&str, &str)> {
        vec![
            ("margin", "0"),
            ("font-family", self.font_family.as_str()),
            ("background", self.colors.background.as_str()),
            ("color", self.colors.text.as_str()),
        ]
    }

    /// Format a price value. Numbers get the currency prefix and two
    /// decimals, strings pass through unchanged.
    pub fn format_price(&self, price: &serde_json::Value) -> Option<String> {
        match price {
            serde_json::Value::Number(n) => n.as_f64().map(|v| format!("{}{:.2}", self.currency, v)),
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
