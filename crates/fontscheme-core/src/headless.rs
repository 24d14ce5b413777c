//! Headless renderer for building mappings without a platform font engine

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::context::ContentSizeCategory;
use crate::error::FontError;
use crate::font::{FontHandle, SymbolicTraits, Weight};
use crate::traits::FontRenderer;

/// Renderer that produces plain value handles
///
/// Every named family can be italicized unless registered with
/// [`HeadlessRenderer::without_italic`]. A handle with no family is unknown.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    families_without_italic: HashSet<String>,
    scale_overrides: HashMap<ContentSizeCategory, f32>,
    fonts_rendered: AtomicUsize,
}

impl HeadlessRenderer {
    /// Create a new headless renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `family` as having no italic face
    pub fn without_italic(mut self, family: &str) -> Self {
        self.families_without_italic.insert(family.to_string());
        self
    }

    /// Replace the standard multiplier for `category`
    pub fn with_scale_factor(mut self, category: ContentSizeCategory, factor: f32) -> Self {
        self.scale_overrides.insert(category, factor);
        self
    }

    /// Number of fonts produced by `render_font` so far
    pub fn fonts_rendered(&self) -> usize {
        self.fonts_rendered.load(Ordering::Relaxed)
    }
}

impl FontRenderer for HeadlessRenderer {
    fn render_font(&self, family: &str, point_size: f32, weight: Weight) -> FontHandle {
        self.fonts_rendered.fetch_add(1, Ordering::Relaxed);
        FontHandle::new(family, point_size, weight)
    }

    fn italic_variant(&self, handle: &FontHandle) -> Result<FontHandle, FontError> {
        if handle.family.is_empty() {
            return Err(FontError::FamilyNotFound(handle.family.clone()));
        }
        if self.families_without_italic.contains(&handle.family) {
            return Err(FontError::ItalicUnavailable {
                family: handle.family.clone(),
            });
        }
        Ok(handle.clone().with_traits(SymbolicTraits::ITALIC))
    }

    fn scale_factor(&self, category: ContentSizeCategory) -> f32 {
        self.scale_overrides
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_scale_factor())
    }
}
