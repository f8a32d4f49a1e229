//! Centralized theme constants for the personal details form
//! All colors, sizes, and styling should reference these constants

use crate::types::{ButtonColor, ButtonSize};
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BORDER_HOVER: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b); // zinc-600

// =============================================================================
// COLORS - Focus
// =============================================================================
pub const FOCUS_RING: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const INPUT_SELECTION: Color32 = Color32::from_rgb(0x0f, 0x3d, 0x2c); // emerald tint

// =============================================================================
// COLORS - Button variants
// =============================================================================
pub const BTN_PRIMARY: Color32 = Color32::from_rgb(0x0d, 0x6e, 0xfd);
pub const BTN_SECONDARY: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_SUCCESS: Color32 = Color32::from_rgb(0x19, 0x87, 0x54);
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600
pub const BTN_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const BTN_INFO: Color32 = Color32::from_rgb(0x22, 0xd3, 0xee); // cyan-400

/// Returns (fill, text_color) for a button color variant
pub fn button_colors(color: ButtonColor) -> (Color32, Color32) {
    match color {
        ButtonColor::Primary => (BTN_PRIMARY, TEXT_PRIMARY),
        ButtonColor::Secondary => (BTN_SECONDARY, TEXT_PRIMARY),
        ButtonColor::Success => (BTN_SUCCESS, TEXT_PRIMARY),
        ButtonColor::Danger => (BTN_DANGER, TEXT_PRIMARY),
        // Light fills get dark text
        ButtonColor::Warning => (BTN_WARNING, BG_BASE),
        ButtonColor::Info => (BTN_INFO, BG_BASE),
    }
}

// =============================================================================
// FONTS
// =============================================================================
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

/// Heading font size for `h1`..`h6`
pub fn heading_size(level: u8) -> f32 {
    match level {
        0 | 1 => 32.0,
        2 => 26.0,
        3 => 22.0,
        4 => 19.0,
        5 => 16.0,
        _ => FONT_BODY,
    }
}

// =============================================================================
// SIZES
// =============================================================================
pub const INPUT_HEIGHT: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 40.0;
pub const BUTTON_HEIGHT_SMALL: f32 = 22.0;

/// Returns (min height, font size) for a button size variant
pub fn button_metrics(size: ButtonSize) -> (f32, f32) {
    match size {
        ButtonSize::Sm => (BUTTON_HEIGHT_SMALL, FONT_SMALL),
        ButtonSize::Md => (BUTTON_HEIGHT, FONT_BODY),
        ButtonSize::Lg => (BUTTON_HEIGHT_LARGE, 18.0),
    }
}

// =============================================================================
// BORDER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XL: f32 = 16.0;

/// Horizontal space between grid columns
pub const GRID_GUTTER: f32 = 24.0;

/// Vertical margin for spacing utility classes like `mb-3`
pub fn spacer(step: u8) -> f32 {
    match step {
        0 => 0.0,
        1 => SPACING_SM,
        2 => SPACING_MD,
        3 => SPACING_XL,
        4 => 24.0,
        _ => 48.0,
    }
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

/// Global visuals tuned for form controls: inputs sit on `BG_INPUT` with a
/// visible border, and the focused input gets a success-green ring that
/// matches the action buttons.
pub fn apply_visuals(ctx: &egui::Context) {
    let input_state = |bg_stroke: egui::Stroke, fg: Color32| egui::style::WidgetVisuals {
        bg_fill: BG_INPUT,
        weak_bg_fill: BG_INPUT,
        bg_stroke,
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        // TextEdit paints its background with this
        extreme_bg_color: BG_INPUT,
        hyperlink_color: FOCUS_RING,
        selection: egui::style::Selection {
            bg_fill: INPUT_SELECTION,
            stroke: egui::Stroke::new(STROKE_MEDIUM, FOCUS_RING),
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_BASE,
                weak_bg_fill: BG_BASE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: input_state(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT), TEXT_SECONDARY),
            hovered: input_state(egui::Stroke::new(STROKE_DEFAULT, BORDER_HOVER), TEXT_PRIMARY),
            active: input_state(egui::Stroke::new(STROKE_MEDIUM, FOCUS_RING), TEXT_PRIMARY),
            open: input_state(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT), TEXT_PRIMARY),
        },
        text_cursor: egui::style::TextCursorStyle {
            stroke: egui::Stroke::new(STROKE_MEDIUM, FOCUS_RING),
            ..Default::default()
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_XL, 6.0);
    });
}

// =============================================================================
// HELPER - Page frame
// =============================================================================
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, SPACING_XL as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Button filled with a color variant and sized by a size variant
pub fn button_variant(text: impl Into<String>, color: ButtonColor, size: ButtonSize) -> egui::Button<'static> {
    let (fill, text_color) = button_colors(color);
    let (height, font) = button_metrics(size);
    egui::Button::new(egui::RichText::new(text.into()).color(text_color).size(font))
        .fill(fill)
        .stroke(egui::Stroke::NONE)
        .corner_radius(if size == ButtonSize::Lg { RADIUS_MEDIUM } else { RADIUS_DEFAULT })
        .min_size(egui::vec2(0.0, height))
}
