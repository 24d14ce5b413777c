//! Concrete font handles and the stateless helpers that operate on them

use std::fmt;

use crate::font::{SymbolicTraits, Weight};
use crate::traits::FontRenderer;

/// Handle to a concrete platform font
#[derive(Debug, Clone, PartialEq)]
pub struct FontHandle {
    /// Font family name
    pub family: String,
    /// Point size after scaling
    pub point_size: f32,
    /// Effective weight
    pub weight: Weight,
    /// Style traits
    pub traits: SymbolicTraits,
}

impl FontHandle {
    pub fn new(family: &str, point_size: f32, weight: Weight) -> Self {
        let traits = if weight.value() >= Weight::Bold.value() {
            SymbolicTraits::BOLD
        } else {
            SymbolicTraits::empty()
        };
        Self {
            family: family.to_string(),
            point_size,
            weight,
            traits,
        }
    }

    pub fn with_traits(mut self, traits: SymbolicTraits) -> Self {
        self.traits |= traits;
        self
    }
}

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.family)?;
        if self.weight != Weight::Regular {
            write!(f, "-{}", self.weight.name())?;
        }
        write!(f, " {}", self.point_size)
    }
}

/// Whether the handle's style traits include italics
pub fn is_italic(handle: &FontHandle) -> bool {
    handle.traits.contains(SymbolicTraits::ITALIC)
}

/// Italic counterpart of `handle`.
///
/// Returns the handle unchanged when it is already italic, and falls back to
/// it when the renderer cannot produce an italic descriptor for the family.
pub fn italic_variant<R: FontRenderer + ?Sized>(renderer: &R, handle: &FontHandle) -> FontHandle {
    if is_italic(handle) {
        return handle.clone();
    }

    match renderer.italic_variant(handle) {
        Ok(italic) => italic,
        Err(e) => {
            tracing::debug!("Italic variant unavailable for {}: {}", handle, e);
            handle.clone()
        }
    }
}

/// Human-readable identifier such as `"System-Semibold 16"`
pub fn display_name(handle: &FontHandle) -> String {
    handle.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessRenderer;

    #[test]
    fn test_display_name_regular_omits_weight() {
        let handle = FontHandle::new("System", 16.0, Weight::Regular);
        assert_eq!(display_name(&handle), "System 16");
    }

    #[test]
    fn test_display_name_with_weight_suffix() {
        let handle = FontHandle::new("System", 16.0, Weight::Semibold);
        assert_eq!(display_name(&handle), "System-Semibold 16");

        let handle = FontHandle::new("Inter", 34.0, Weight::UltraLight);
        assert_eq!(display_name(&handle), "Inter-UltraLight 34");
    }

    #[test]
    fn test_bold_trait_follows_weight() {
        assert!(!FontHandle::new("System", 12.0, Weight::Semibold)
            .traits
            .contains(SymbolicTraits::BOLD));
        assert!(FontHandle::new("System", 12.0, Weight::Bold)
            .traits
            .contains(SymbolicTraits::BOLD));
    }

    #[test]
    fn test_italic_variant() {
        let renderer = HeadlessRenderer::new();
        let handle = FontHandle::new("System", 16.0, Weight::Medium);
        assert!(!is_italic(&handle));

        let italic = italic_variant(&renderer, &handle);
        assert!(is_italic(&italic));
        assert_eq!(italic.family, handle.family);
        assert_eq!(italic.point_size, handle.point_size);
        assert_eq!(italic.weight, handle.weight);
    }

    #[test]
    fn test_italic_variant_is_idempotent() {
        let renderer = HeadlessRenderer::new();
        let handle = FontHandle::new("System", 16.0, Weight::Bold);
        let once = italic_variant(&renderer, &handle);
        let twice = italic_variant(&renderer, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_italic_variant_falls_back_to_original() {
        let renderer = HeadlessRenderer::new().without_italic("Symbols");
        let handle = FontHandle::new("Symbols", 16.0, Weight::Regular);
        let result = italic_variant(&renderer, &handle);
        assert_eq!(result, handle);
        assert!(!is_italic(&result));
    }

    #[test]
    fn test_italic_variant_falls_back_for_unknown_family() {
        let renderer = HeadlessRenderer::new();
        let handle = FontHandle::new("", 12.0, Weight::Light);
        assert_eq!(italic_variant(&renderer, &handle), handle);
    }
}
