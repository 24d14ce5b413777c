//! fontscheme core - platform-agnostic font resolution
//!
//! Maps semantic font descriptors (size bucket, weight, text style) to
//! concrete font handles, honoring the platform's dynamic-type scale and
//! bold-text accessibility setting.

pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod font;
pub mod headless;
pub mod scheme;
pub mod traits;

// Re-export main types
pub use config::SchemeConfig;
pub use context::{ContentSizeCategory, ContentSizeContext};
pub use error::{FontError, SchemeError, SchemeResult};
pub use font::{
    display_name, is_italic, italic_variant, resolve, FontHandle, FontMapping, FontSpec,
    SizeCategory, SymbolicTraits, TextStyle, Weight,
};
pub use headless::HeadlessRenderer;
pub use scheme::FontResolutionScheme;
pub use traits::FontRenderer;
