//! Canonical size tables for each text style

use crate::constants::{DEFAULT_STYLE_SIZES, INPUT_TEXT_SIZES, LARGE_TITLE_SIZES};
use crate::font::{SizeCategory, TextStyle, Weight};

/// Weights provided for the default style, per size category.
/// Only these pairs exist; the default style gets no full weight fan-out.
const DEFAULT_STYLE_ENTRIES: [(SizeCategory, Weight); 12] = [
    (SizeCategory::Large, Weight::Regular),
    (SizeCategory::Large, Weight::Semibold),
    (SizeCategory::Large, Weight::Bold),
    (SizeCategory::Normal, Weight::Regular),
    (SizeCategory::Normal, Weight::Medium),
    (SizeCategory::Normal, Weight::Semibold),
    (SizeCategory::Normal, Weight::Bold),
    (SizeCategory::Medium, Weight::Regular),
    (SizeCategory::Medium, Weight::Medium),
    (SizeCategory::Medium, Weight::Semibold),
    (SizeCategory::Small, Weight::Regular),
    (SizeCategory::Small, Weight::Medium),
];

fn size_table(style: TextStyle) -> &'static [f32; 4] {
    match style {
        TextStyle::Default => &DEFAULT_STYLE_SIZES,
        TextStyle::LargeTitle => &LARGE_TITLE_SIZES,
        TextStyle::InputText => &INPUT_TEXT_SIZES,
    }
}

/// Unscaled point size for a style and size category
pub fn base_point_size(style: TextStyle, size: SizeCategory) -> f32 {
    size_table(style)[size.index()]
}

/// Size categories declared for a style, paired with their base point sizes
pub fn declared_sizes(style: TextStyle) -> impl Iterator<Item = (SizeCategory, f32)> {
    SizeCategory::ALL
        .into_iter()
        .map(move |size| (size, base_point_size(style, size)))
}

/// Every (size, weight) pair a mapping holds for `style`
pub fn declared_entries(style: TextStyle) -> Vec<(SizeCategory, Weight)> {
    match style {
        TextStyle::Default => DEFAULT_STYLE_ENTRIES.to_vec(),
        TextStyle::LargeTitle | TextStyle::InputText => declared_sizes(style)
            .flat_map(|(size, _)| Weight::ALL.into_iter().map(move |weight| (size, weight)))
            .collect(),
    }
}
