//! fontscheme - semantic font resolution for UI text
//!
//! This crate resolves font descriptors to concrete fonts with support for:
//! - Dynamic-type content-size scaling
//! - Bold-text accessibility weight substitution
//! - Italic variants with graceful fallback
//! - Atomic mapping replacement on accessibility changes

pub mod store;

// Re-export main types for convenience
pub use fontscheme_core::{
    display_name, is_italic, italic_variant, resolve, ContentSizeCategory, ContentSizeContext,
    FontError, FontHandle, FontMapping, FontRenderer, FontResolutionScheme, FontSpec,
    HeadlessRenderer, SchemeConfig, SchemeError, SchemeResult, SizeCategory, SymbolicTraits,
    TextStyle, Weight,
};
pub use store::SchemeStore;
