//! Reusable UI components
//!
//! Leaf widgets for layout nodes. Styling classes carried by nodes are
//! interpreted here.

use crate::theme;
use crate::types::{ButtonColor, ButtonSize};
use eframe::egui;

/// Stable widget id for the input with the given element id
pub fn input_id(id: &str) -> egui::Id {
    egui::Id::new(("input", id))
}

fn has_class(class: &str, name: &str) -> bool {
    class.split_whitespace().any(|c| c == name)
}

/// Bottom margin step from an `mb-N` utility class
pub fn margin_bottom(class: &str) -> Option<u8> {
    class
        .split_whitespace()
        .find_map(|c| c.strip_prefix("mb-"))
        .and_then(|n| n.parse().ok())
}

pub fn heading(ui: &mut egui::Ui, level: u8, text: &str, class: Option<&str>) -> egui::Response {
    let response = ui.label(
        egui::RichText::new(text)
            .size(theme::heading_size(level))
            .color(theme::TEXT_PRIMARY)
            .strong(),
    );
    if let Some(step) = class.and_then(margin_bottom) {
        ui.add_space(theme::spacer(step));
    }
    response
}

/// Form label. Clicking it focuses the input it targets.
pub fn form_label(ui: &mut egui::Ui, html_for: &str, text: &str) -> egui::Response {
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .sense(egui::Sense::click()),
    );
    if response.clicked() {
        ui.memory_mut(|m| m.request_focus(input_id(html_for)));
    }
    response
}

/// Single-line text input whose buffer is owned by the caller
pub fn text_input(
    ui: &mut egui::Ui,
    id: &str,
    class: &str,
    placeholder: &str,
    buffer: &mut String,
) -> egui::Response {
    let width = if has_class(class, "form-control") {
        ui.available_width()
    } else {
        ui.spacing().text_edit_width
    };
    ui.add(
        egui::TextEdit::singleline(buffer)
            .id(input_id(id))
            .hint_text(egui::RichText::new(placeholder).color(theme::TEXT_DIM))
            .desired_width(width)
            .min_size(egui::vec2(0.0, theme::INPUT_HEIGHT))
            .margin(egui::Margin::symmetric(theme::SPACING_MD as i8, theme::SPACING_SM as i8))
            .vertical_align(egui::Align::Center),
    )
}

pub fn action_button(ui: &mut egui::Ui, text: &str, color: ButtonColor, size: ButtonSize) -> egui::Response {
    ui.add(theme::button_variant(text, color, size))
}
