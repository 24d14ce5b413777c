// src/constants.rs

pub const DEFAULT_FONT_FAMILY: &str = "System";

/// Body text size at the platform's default content-size category.
pub const REFERENCE_BODY_SIZE: f32 = 17.0;

// Body text point sizes for each content-size category, smallest to largest.
// Scale factors are derived from these relative to REFERENCE_BODY_SIZE.
pub const CATEGORY_BODY_SIZES: [f32; 12] = [
    14.0, // Extra small
    15.0, // Small
    16.0, // Medium
    17.0, // Large (default)
    19.0, // Extra large
    21.0, // Extra extra large
    23.0, // Extra extra extra large
    28.0, // Accessibility medium
    33.0, // Accessibility large
    40.0, // Accessibility extra large
    47.0, // Accessibility extra extra large
    53.0, // Accessibility extra extra extra large
];

// Base point sizes, indexed by size category: large, normal, medium, small
pub const DEFAULT_STYLE_SIZES: [f32; 4] = [24.0, 16.0, 12.0, 11.0];
pub const LARGE_TITLE_SIZES: [f32; 4] = [34.0, 28.0, 22.0, 20.0];
pub const INPUT_TEXT_SIZES: [f32; 4] = [20.0, 17.0, 15.0, 13.0];
