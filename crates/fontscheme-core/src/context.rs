//! Accessibility inputs that a font mapping is built for

use crate::constants::{CATEGORY_BODY_SIZES, REFERENCE_BODY_SIZE};

/// Platform dynamic-type step, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    /// Platform default
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    pub const ALL: [ContentSizeCategory; 12] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    /// Position on the dynamic-type scale, 0 for `ExtraSmall`
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Whether this is one of the larger accessibility sizes
    pub fn is_accessibility(self) -> bool {
        self >= ContentSizeCategory::AccessibilityMedium
    }

    /// Standard multiplier for this category, 1.0 at `Large`
    pub fn default_scale_factor(self) -> f32 {
        CATEGORY_BODY_SIZES[self.ordinal()] / REFERENCE_BODY_SIZE
    }
}

/// Accessibility state a font mapping is built against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ContentSizeContext {
    pub category: ContentSizeCategory,
    /// System-wide bold text is enabled
    pub bold_text: bool,
}

impl ContentSizeContext {
    pub fn new(category: ContentSizeCategory, bold_text: bool) -> Self {
        Self { category, bold_text }
    }
}
