//! Demo host theme: palette, visuals and the few custom controls the sidebar uses

use eframe::egui;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400

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
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const REGION_MAX: f32 = 1200.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = Color32::from_rgb(0x1a, 0x1a, 0x1e);
    visuals.extreme_bg_color = BG_BASE;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.slider_trailing_fill = true;
    visuals.window_corner_radius = egui::CornerRadius::same(8);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = BG_ELEVATED;
    widgets.noninteractive.bg_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);
    widgets.noninteractive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    widgets.inactive.bg_fill = BG_SURFACE;
    widgets.inactive.weak_bg_fill = BG_ELEVATED;
    widgets.inactive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY);
    widgets.hovered.bg_fill = BG_HOVER;
    widgets.hovered.bg_stroke = egui::Stroke::NONE;
    widgets.hovered.fg_stroke = egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY);
    // Sliders and checkboxes pick up the accent when active
    widgets.active.bg_fill = ACCENT;
    widgets.active.bg_stroke = egui::Stroke::NONE;
    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        w.corner_radius = RADIUS_DEFAULT.into();
    }
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.slider_width = 150.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .inner_margin(egui::Margin::same(16))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 150))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button with a leading Phosphor icon
pub fn icon_button(icon: &str, text: &str) -> egui::Button<'static> {
    egui::Button::new(format!("{}  {}", icon, text))
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Section header label in the sidebar
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(FONT_SECTION)
            .color(TEXT_DIM),
    );
}
