use crate::context::ContentSizeCategory;
use crate::error::FontError;
use crate::font::{FontHandle, Weight};

/// Platform font engine seam
///
/// The scheme decides sizes and weights; the renderer turns them into
/// concrete handles and reports the platform's dynamic-type multipliers.
pub trait FontRenderer {
    /// Produce a font for the given family, point size and weight
    fn render_font(&self, family: &str, point_size: f32, weight: Weight) -> FontHandle;

    /// Produce an italic descriptor for `handle`, if the family has one
    fn italic_variant(&self, handle: &FontHandle) -> Result<FontHandle, FontError>;

    /// Multiplier applied to base point sizes for `category`
    fn scale_factor(&self, category: ContentSizeCategory) -> f32 {
        category.default_scale_factor()
    }
}
