use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};
use crate::model::AppState;
use crate::QuizApp;
use crate::ui::files::{export_to_file, import_from_file};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(app.stats_snapshot().label());
            ui.separator();

            if ui.button("🔄 Reiniciar estadísticas").clicked() {
                app.confirm_reset = true;
            }

            let adding = app.state == AppState::AddCard;
            if ui
                .add_enabled(!adding, Button::new("➕ Añadir flashcard"))
                .clicked()
            {
                app.message.clear();
                app.state = AppState::AddCard;
            }

            if ui.button("📤 Exportar").clicked() {
                export_to_file(app);
            }
            if ui.button("📥 Importar").clicked() {
                import_from_file(app, ctx);
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    app.dark_mode = true;
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    app.dark_mode = false;
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}
