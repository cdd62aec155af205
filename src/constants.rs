//! Sizing and styling constants for the panels.

/// Swatch strip height
pub const STRIP_HEIGHT: f32 = 28.0;

/// Preview swatch edge length
pub const PREVIEW_SIZE: f32 = 48.0;

/// Border radius for swatches and inputs
pub const RADIUS: f32 = 4.0;

/// Gap between panel elements
pub const GAP: f32 = 8.0;

/// Padding around a panel
pub const PADDING: f32 = 8.0;

/// Numeric input field width
pub const INPUT_WIDTH: f32 = 34.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Pantone name input field width
pub const NAME_INPUT_WIDTH: f32 = 130.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Section heading font size
pub const HEADING_FONT: f32 = 12.0;
