//! Paints a mounted layout tree with egui
//!
//! Inputs are uncontrolled: the renderer owns their text, keyed by element
//! id, the way a browser owns the value of an unbound form field.

use super::components;
use crate::grid;
use crate::theme;
use crate::types::Node;
use eframe::egui;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Default)]
pub struct Renderer {
    fields: BTreeMap<String, String>,
    /// Viewport width for the frame being drawn, drives grid breakpoints
    viewport: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of an input, if it has been rendered
    #[cfg(test)]
    pub(crate) fn field(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Render a container's children top to bottom
    pub fn show(&mut self, ui: &mut egui::Ui, nodes: &[Node]) {
        self.viewport = ui.ctx().screen_rect().width();
        self.show_nodes(ui, nodes);
    }

    fn show_nodes(&mut self, ui: &mut egui::Ui, nodes: &[Node]) {
        for node in nodes {
            self.node(ui, node);
        }
    }

    fn node(&mut self, ui: &mut egui::Ui, node: &Node) {
        match node {
            Node::Row { children } => self.row(ui, children),
            // A column outside a row is a plain full-width block
            Node::Col { children, .. } => {
                ui.vertical(|ui| self.show_nodes(ui, children));
            }
            Node::Heading { level, text, class } => {
                components::heading(ui, *level, text, class.as_deref());
            }
            Node::Label { html_for, text } => {
                components::form_label(ui, html_for, text);
            }
            Node::Input {
                id,
                class,
                placeholder,
                ..
            } => {
                let buffer = self.fields.entry(id.clone()).or_default();
                components::text_input(ui, id, class, placeholder, buffer);
            }
            Node::Button { text, size, color } => {
                if components::action_button(ui, text, *color, *size).clicked() {
                    debug!(button = %text, "Button clicked, no action attached");
                }
            }
        }
    }

    fn row(&mut self, ui: &mut egui::Ui, children: &[Node]) {
        let spans: Vec<Option<u8>> = children
            .iter()
            .map(|c| match c {
                Node::Col { lg, .. } => *lg,
                _ => Some(grid::GRID_COLUMNS),
            })
            .collect();

        let available = ui.available_width();
        for line in grid::layout_row(self.viewport, available, &spans) {
            let n = line.len() as f32;
            // Gutters sit between cells, so each cell gives up its share
            let shrink = theme::GRID_GUTTER * (n - 1.0) / n;
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = theme::GRID_GUTTER;
                for cell in &line {
                    let width = (cell.width - shrink).max(0.0);
                    ui.allocate_ui_with_layout(
                        egui::vec2(width, ui.available_height()),
                        egui::Layout::top_down(egui::Align::Min),
                        |ui| {
                            ui.set_width(width);
                            match &children[cell.index] {
                                Node::Col { children, .. } => self.show_nodes(ui, children),
                                other => self.node(ui, other),
                            }
                        },
                    );
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::personal_details::{personal_details, FIRST_NAME_ID, LAST_NAME_ID};

    fn frame(renderer: &mut Renderer, nodes: &[Node], width: f32) {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 800.0),
            )),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| renderer.show(ui, nodes));
        });
    }

    #[test]
    fn rendering_registers_uncontrolled_fields() {
        let mut renderer = Renderer::new();
        frame(&mut renderer, &[personal_details()], 1280.0);
        assert_eq!(renderer.field_count(), 2);
        assert_eq!(renderer.field(FIRST_NAME_ID), Some(""));
        assert_eq!(renderer.field(LAST_NAME_ID), Some(""));
    }

    #[test]
    fn narrow_window_renders_stacked_layout() {
        let mut renderer = Renderer::new();
        frame(&mut renderer, &[personal_details()], 480.0);
        assert_eq!(renderer.field_count(), 2);
    }

    #[test]
    fn field_text_survives_rerender() {
        let mut renderer = Renderer::new();
        renderer
            .fields
            .insert(FIRST_NAME_ID.to_string(), "Ada".to_string());
        frame(&mut renderer, &[personal_details()], 1280.0);
        assert_eq!(renderer.field(FIRST_NAME_ID), Some("Ada"));
    }

    #[test]
    fn show_records_viewport_width() {
        let mut renderer = Renderer::new();
        frame(&mut renderer, &[personal_details()], 1100.0);
        assert_eq!(renderer.viewport, 1100.0);
    }

    #[test]
    fn empty_container_renders_nothing() {
        let mut renderer = Renderer::new();
        frame(&mut renderer, &[], 1280.0);
        assert_eq!(renderer.field_count(), 0);
    }
}
