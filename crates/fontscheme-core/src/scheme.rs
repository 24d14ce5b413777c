//! Construction of font mappings from size tables and accessibility state

use tracing::debug;

use crate::config::SchemeConfig;
use crate::context::ContentSizeContext;
use crate::error::SchemeResult;
use crate::font::{base_point_size, declared_entries, FontMapping, FontSpec, TextStyle};
use crate::traits::FontRenderer;

/// Builds [`FontMapping`]s for a renderer and configuration
pub struct FontResolutionScheme<R: FontRenderer> {
    config: SchemeConfig,
    renderer: R,
}

impl<R: FontRenderer> FontResolutionScheme<R> {
    /// Create a scheme with the default configuration
    pub fn new(renderer: R) -> Self {
        Self {
            config: SchemeConfig::default(),
            renderer,
        }
    }

    /// Create a scheme after validating `config`
    pub fn with_config(renderer: R, config: SchemeConfig) -> SchemeResult<Self> {
        config.validate()?;
        Ok(Self { config, renderer })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Populate a mapping for `ctx`
    pub fn build(&self, ctx: ContentSizeContext) -> FontMapping {
        let scale = self.renderer.scale_factor(ctx.category);
        let mut mapping = FontMapping::new(ctx);

        for style in TextStyle::ALL {
            let style_scale = if self.is_scaled(style) { scale } else { 1.0 };

            for (size, weight) in declared_entries(style) {
                let point_size = (base_point_size(style, size) * style_scale).round();
                let effective_weight = weight.substitute(ctx.bold_text);
                let handle = self
                    .renderer
                    .render_font(&self.config.family, point_size, effective_weight);
                mapping.insert(FontSpec::new(size, weight, style), handle);
            }
        }

        debug!(
            "Built font mapping: category={:?}, a11y={}, bold_text={}, scale={}, entries={}",
            ctx.category,
            ctx.category.is_accessibility(),
            ctx.bold_text,
            scale,
            mapping.len()
        );
        mapping
    }

    fn is_scaled(&self, style: TextStyle) -> bool {
        match style {
            TextStyle::Default => self.config.scale_default_style,
            TextStyle::LargeTitle | TextStyle::InputText => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContentSizeCategory;
    use crate::error::SchemeError;
    use crate::font::{SizeCategory, Weight};
    use crate::headless::HeadlessRenderer;

    fn scheme() -> FontResolutionScheme<HeadlessRenderer> {
        FontResolutionScheme::new(HeadlessRenderer::new())
    }

    #[test]
    fn test_entry_count() {
        let mapping = scheme().build(ContentSizeContext::default());
        // 2 styles x 4 sizes x 9 weights + 12 default-style pairs
        assert_eq!(mapping.len(), 2 * 4 * 9 + 12);
        assert_eq!(mapping.context(), ContentSizeContext::default());
    }

    #[test]
    fn test_unscaled_sizes_at_default_category() {
        let mapping = scheme().build(ContentSizeContext::default());
        let spec = FontSpec::new(SizeCategory::Normal, Weight::Regular, TextStyle::InputText);
        assert_eq!(mapping.point_size(&spec), Some(17.0));
        let spec = FontSpec::new(SizeCategory::Large, Weight::Bold, TextStyle::LargeTitle);
        assert_eq!(mapping.point_size(&spec), Some(34.0));
    }

    #[test]
    fn test_scaled_sizes_are_rounded() {
        let ctx = ContentSizeContext::new(ContentSizeCategory::ExtraLarge, false);
        let mapping = scheme().build(ctx);
        // 17 * 19/17 = 19
        let spec = FontSpec::new(SizeCategory::Normal, Weight::Regular, TextStyle::InputText);
        assert_eq!(mapping.point_size(&spec), Some(19.0));
        // 13 * 19/17 = 14.53
        let spec = FontSpec::new(SizeCategory::Small, Weight::Regular, TextStyle::InputText);
        assert_eq!(mapping.point_size(&spec), Some(15.0));
    }

    #[test]
    fn test_default_style_fixed_unless_configured() {
        let ctx = ContentSizeContext::new(ContentSizeCategory::AccessibilityLarge, false);
        let spec = FontSpec::new(SizeCategory::Normal, Weight::Regular, TextStyle::Default);

        let mapping = scheme().build(ctx);
        assert_eq!(mapping.point_size(&spec), Some(16.0));

        let config = SchemeConfig::new().with_default_style_scaling(true);
        let scaled = FontResolutionScheme::with_config(HeadlessRenderer::new(), config).unwrap();
        let mapping = scaled.build(ctx);
        // 16 * 33/17 = 31.06
        assert_eq!(mapping.point_size(&spec), Some(31.0));
    }

    #[test]
    fn test_renderer_scale_overrides_drive_sizes() {
        let renderer = HeadlessRenderer::new()
            .with_scale_factor(ContentSizeCategory::Large, 1.5)
            .with_scale_factor(ContentSizeCategory::ExtraLarge, 2.0);
        let scheme = FontResolutionScheme::new(renderer);

        let large = scheme.build(ContentSizeContext::new(ContentSizeCategory::Large, false));
        let extra = scheme.build(ContentSizeContext::new(ContentSizeCategory::ExtraLarge, false));

        // 17 * 1.5 = 25.5, rounded away from zero
        let spec = FontSpec::new(SizeCategory::Normal, Weight::Regular, TextStyle::InputText);
        assert_eq!(large.point_size(&spec), Some(26.0));
        assert_eq!(extra.point_size(&spec), Some(34.0));

        for (spec, handle) in large.iter() {
            let scaled = extra.point_size(spec).expect("same entries in every context");
            assert!(handle.point_size <= scaled, "{:?}: {} > {}", spec, handle.point_size, scaled);
        }
    }

    #[test]
    fn test_bold_text_substitutes_light_weights() {
        let ctx = ContentSizeContext::new(ContentSizeCategory::Large, true);
        let mapping = scheme().build(ctx);

        let thin = FontSpec::new(SizeCategory::Medium, Weight::Thin, TextStyle::LargeTitle);
        let heavy = FontSpec::new(SizeCategory::Medium, Weight::Heavy, TextStyle::LargeTitle);
        assert_eq!(mapping.resolve(&thin).map(|h| h.weight), Some(Weight::Regular));
        assert_eq!(mapping.resolve(&heavy).map(|h| h.weight), Some(Weight::Heavy));
    }

    #[test]
    fn test_configured_family_is_used() {
        let config = SchemeConfig::new().with_family("Inter");
        let scheme = FontResolutionScheme::with_config(HeadlessRenderer::new(), config).unwrap();
        let mapping = scheme.build(ContentSizeContext::default());
        assert!(mapping.iter().all(|(_, handle)| handle.family == "Inter"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SchemeConfig::new().with_family("");
        let result = FontResolutionScheme::with_config(HeadlessRenderer::new(), config);
        assert!(matches!(result, Err(SchemeError::ConfigurationError { .. })));
    }

    #[test]
    fn test_renderer_called_once_per_entry() {
        let scheme = scheme();
        let mapping = scheme.build(ContentSizeContext::default());
        assert_eq!(scheme.renderer().fonts_rendered(), mapping.len());
    }
}
