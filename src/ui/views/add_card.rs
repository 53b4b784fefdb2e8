use egui::{Context, TextEdit};
use crate::model::CardType;
use crate::QuizApp;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;

pub fn ui_add_card(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 520.0, 600.0, |ui| {
        let width = ui.available_width();
        ui.heading("Añadir flashcard");
        ui.add_space(10.0);

        ui.label("Pregunta");
        ui.add(
            TextEdit::multiline(&mut app.draft.question)
                .desired_rows(2)
                .desired_width(width),
        );

        ui.horizontal(|ui| {
            ui.label("Tipo:");
            ui.radio_value(&mut app.draft.card_type, CardType::Single, "Respuesta única");
            ui.radio_value(&mut app.draft.card_type, CardType::Multiple, "Respuesta múltiple");
        });

        ui.add_space(6.0);
        ui.label("Opciones (marca las correctas)");
        let single = app.draft.card_type == CardType::Single;
        let can_remove = app.draft.options.len() > 2;
        let mut remove = None;
        for i in 0..app.draft.options.len() {
            ui.horizontal(|ui| {
                let checked = app.draft.correct[i];
                if single {
                    if ui.radio(checked, "").clicked() {
                        app.draft.set_correct(i, true);
                    }
                } else {
                    let mut value = checked;
                    if ui.checkbox(&mut value, "").changed() {
                        app.draft.set_correct(i, value);
                    }
                }
                ui.add(
                    TextEdit::singleline(&mut app.draft.options[i])
                        .hint_text(format!("Opción {}", i + 1))
                        .desired_width(width - 90.0),
                );
                if can_remove && ui.small_button("🗑").clicked() {
                    remove = Some(i);
                }
            });
        }
        if let Some(i) = remove {
            app.draft.remove_option(i);
        }
        if ui.button("➕ Opción").clicked() {
            app.draft.add_option();
        }

        ui.add_space(6.0);
        ui.label("Explicación");
        ui.add(
            TextEdit::multiline(&mut app.draft.explanation)
                .desired_rows(3)
                .desired_width(width),
        );

        ui.add_space(10.0);
        let (save, cancel) = two_button_row(ui, width, ("Guardar", true), ("Cancelar", true));
        if save {
            app.submit_draft();
        }
        if cancel {
            app.message.clear();
            app.close_add_form();
        }

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.label(&app.message);
        }
    });
}
