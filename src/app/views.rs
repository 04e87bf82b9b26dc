//! View rendering (controls sidebar, host region, commit history)

use super::{theme, App};
use crate::settings::GlyphStyle;
use crate::utils::format_dimension;
use eframe::egui;
use egui_phosphor::regular as icons;
use star_rating::HoverPhase;

const DEFAULT_REGION_WIDTH: f32 = 200.0;
const DEFAULT_REGION_HEIGHT: f32 = 40.0;
const HOST_PANE_HEIGHT: f32 = 240.0;

impl App {
    /// Left sidebar: the props a host would hand the widget
    pub(crate) fn render_controls(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.label(
            egui::RichText::new(format!("{}  Star Rating", icons::STAR))
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_LG);

        theme::section_label(ui, "Region");
        changed |= dimension_control(ui, "Fill width", &mut self.container_width, DEFAULT_REGION_WIDTH);
        changed |= dimension_control(ui, "Fill height", &mut self.container_height, DEFAULT_REGION_HEIGHT);
        ui.add_space(theme::SPACING_MD);

        theme::section_label(ui, "Stars");
        changed |= ui
            .add(egui::Slider::new(&mut self.max_stars, 1..=10).text("max"))
            .changed();
        ui.add_space(theme::SPACING_MD);

        theme::section_label(ui, "Mode");
        changed |= ui.checkbox(&mut self.read_only, "Read only").changed();
        ui.horizontal(|ui| {
            changed |= ui
                .radio_value(&mut self.glyph_style, GlyphStyle::Vector, "Vector")
                .changed();
            changed |= ui
                .radio_value(&mut self.glyph_style, GlyphStyle::Text, "Text")
                .changed();
        });
        ui.add_space(theme::SPACING_LG);

        if ui
            .add(theme::icon_button(icons::ARROW_COUNTER_CLOCKWISE, "Reset rating"))
            .clicked()
        {
            self.reset_rating();
        }

        if changed {
            self.save_settings();
        }
    }

    /// Central panel: the host region with the widget inside, plus what the host sees
    pub(crate) fn render_host(&mut self, ui: &mut egui::Ui) {
        let config = self.config();
        let pane_height = HOST_PANE_HEIGHT.max(config.effective_height());
        let mut committed = None;

        let pane = theme::card_frame().show(ui, |ui| {
            ui.allocate_ui(egui::vec2(ui.available_width(), pane_height), |ui| {
                ui.set_min_height(pane_height);
                match self.glyph_style {
                    GlyphStyle::Vector => {
                        self.vector_widget.show(ui, &config, |r| committed = Some(r))
                    }
                    GlyphStyle::Text => self.text_widget.show(ui, &config, |r| committed = Some(r)),
                }
            })
            .inner
        });
        let region = pane.inner;
        ui.painter().rect_stroke(
            region.rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
            egui::StrokeKind::Outside,
        );

        if let Some(rating) = committed {
            self.record_commit(rating);
        }

        ui.add_space(theme::SPACING_LG);
        let (geometry, phase) = match self.glyph_style {
            GlyphStyle::Vector => (
                self.vector_widget.geometry(&config),
                self.vector_widget.phase(),
            ),
            GlyphStyle::Text => (self.text_widget.geometry(&config), self.text_widget.phase()),
        };

        egui::Grid::new("host_readout")
            .num_columns(2)
            .spacing([theme::SPACING_LG, theme::SPACING_SM])
            .show(ui, |ui| {
                readout(ui, "Committed", format!("{}", self.rating));
                readout(
                    ui,
                    "Region",
                    format!(
                        "{} x {}",
                        format_dimension(self.container_width),
                        format_dimension(self.container_height)
                    ),
                );
                readout(
                    ui,
                    "Geometry",
                    format!(
                        "star {}px, gap {}px, top {:.1}px",
                        geometry.star_size, geometry.gap, geometry.top_padding
                    ),
                );
                let hover = match phase {
                    HoverPhase::Idle => "idle".to_string(),
                    HoverPhase::Hovering(i) => format!("hovering {}", i),
                };
                readout(ui, "Hover", hover);
            });

        ui.add_space(theme::SPACING_LG);
        theme::section_label(ui, "Commits");
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.history.is_empty() {
                    ui.label(egui::RichText::new("No ratings yet").color(theme::TEXT_DIM));
                }
                for commit in &self.history {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  {} {}",
                            commit.at.format("%H:%M:%S"),
                            icons::STAR,
                            commit.rating
                        ))
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                    );
                }
            });
    }
}

/// Fill toggle plus a pixel slider when the side is constrained. Returns true if changed.
fn dimension_control(ui: &mut egui::Ui, label: &str, value: &mut Option<f32>, default: f32) -> bool {
    let mut changed = false;
    let mut fill = value.is_none();
    if ui.checkbox(&mut fill, label).changed() {
        *value = if fill { None } else { Some(default) };
        changed = true;
    }
    if let Some(v) = value.as_mut() {
        changed |= ui
            .add(egui::Slider::new(v, 1.0..=theme::REGION_MAX).suffix(" px"))
            .changed();
    }
    changed
}

fn readout(ui: &mut egui::Ui, key: &str, value: String) {
    ui.label(
        egui::RichText::new(key)
            .size(theme::FONT_SMALL)
            .color(theme::TEXT_MUTED),
    );
    ui.label(egui::RichText::new(value).color(theme::TEXT_PRIMARY));
    ui.end_row();
}
