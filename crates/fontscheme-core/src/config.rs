// src/config.rs
use crate::constants::DEFAULT_FONT_FAMILY;
use crate::error::{SchemeError, SchemeResult};

#[derive(Clone, Debug, PartialEq)]
pub struct SchemeConfig {
    /// Family name handed to the renderer for every entry
    pub family: String,
    /// Apply the content-size scale factor to the default style table as well.
    /// The default style keeps its fixed sizes when this is off.
    pub scale_default_style: bool,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            scale_default_style: false,
        }
    }
}

impl SchemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: &str) -> Self {
        self.family = family.to_string();
        self
    }

    pub fn with_default_style_scaling(mut self, enabled: bool) -> Self {
        self.scale_default_style = enabled;
        self
    }

    /// Check the configuration before a scheme is built from it
    pub fn validate(&self) -> SchemeResult<()> {
        if self.family.trim().is_empty() {
            return Err(SchemeError::ConfigurationError {
                field: "family".to_string(),
                value: self.family.clone(),
            });
        }
        Ok(())
    }
}
