// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};
use crate::grader::OptionMark;
use crate::view_models::OptionRow;

pub const CORRECT_GREEN: Color32 = Color32::from_rgb(72, 187, 120);
pub const WRONG_RED: Color32 = Color32::from_rgb(245, 101, 101);

/// Botón de opción a ancho completo. Verde/rojo tras corregir, resaltado si está seleccionado.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32, checkbox: bool) -> bool {
    let prefix = match (checkbox, row.selected) {
        (true, true) => "☑ ",
        (true, false) => "☐ ",
        _ => "",
    };
    let mut button =
        Button::new(format!("{prefix}{}", row.text)).min_size(Vec2::new(width, 36.0));

    let fill = match row.mark {
        Some(OptionMark::Correct) => Some(CORRECT_GREEN),
        Some(OptionMark::Wrong) => Some(WRONG_RED),
        _ if row.selected => Some(ui.visuals().selection.bg_fill),
        _ => None,
    };
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add(button).clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
