//! Semantic font descriptors and their resolution into concrete handles
//!
//! A [`FontSpec`] names a font by intent (size bucket, weight, text style).
//! [`FontMapping`] holds the handles those specs resolve to for one
//! accessibility context.

pub mod handle;
pub mod mapping;
pub mod tables;

pub use handle::{display_name, is_italic, italic_variant, FontHandle};
pub use mapping::{resolve, FontMapping};
pub use tables::{base_point_size, declared_entries, declared_sizes};

use bitflags::bitflags;

/// Named point-size buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeCategory {
    Large,
    Normal,
    Medium,
    Small,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Large,
        SizeCategory::Normal,
        SizeCategory::Medium,
        SizeCategory::Small,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Qualitative font weight, ordered from lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl Weight {
    pub const ALL: [Weight; 9] = [
        Weight::UltraLight,
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Medium,
        Weight::Semibold,
        Weight::Bold,
        Weight::Heavy,
        Weight::Black,
    ];

    /// Numeric weight on the 100-900 scale
    pub fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Capitalized name, as used in display names
    pub fn name(self) -> &'static str {
        match self {
            Weight::UltraLight => "UltraLight",
            Weight::Thin => "Thin",
            Weight::Light => "Light",
            Weight::Regular => "Regular",
            Weight::Medium => "Medium",
            Weight::Semibold => "Semibold",
            Weight::Bold => "Bold",
            Weight::Heavy => "Heavy",
            Weight::Black => "Black",
        }
    }

    /// Weight actually requested from the platform.
    ///
    /// With bold text enabled, anything lighter than regular is raised to
    /// regular; medium and heavier pass through.
    pub fn substitute(self, bold_text: bool) -> Weight {
        if bold_text && self < Weight::Regular {
            Weight::Regular
        } else {
            self
        }
    }
}

/// Selects which size table a spec is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Default,
    LargeTitle,
    InputText,
}

impl TextStyle {
    pub const ALL: [TextStyle; 3] = [
        TextStyle::Default,
        TextStyle::LargeTitle,
        TextStyle::InputText,
    ];
}

/// Semantic font descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub size: SizeCategory,
    pub weight: Weight,
    pub style: TextStyle,
}

impl FontSpec {
    pub const fn new(size: SizeCategory, weight: Weight, style: TextStyle) -> Self {
        Self { size, weight, style }
    }
}

bitflags! {
    /// Style traits carried by a font descriptor, independent of family
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolicTraits: u8 {
        const ITALIC = 0b0001;
        const BOLD   = 0b0010;
    }
}
