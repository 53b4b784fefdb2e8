use egui::{Context, RichText};
use crate::model::CardType;
use crate::QuizApp;
use crate::ui::helpers::{CORRECT_GREEN, WRONG_RED, option_button, two_button_row};
use crate::ui::layout::centered_panel;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 460.0, 650.0, |ui| {
        ui.vertical_centered(|ui| {
            let nav = app.nav_snapshot();
            let Some(card) = app.current_card() else {
                ui.heading("No hay flashcards disponibles. ¡Añade una nueva!");
                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(&app.message);
                }
                return;
            };
            let question = card.question.clone();
            let card_type = card.card_type();

            ui.label(nav.label());
            ui.add_space(6.0);
            ui.heading(question);
            if card_type == CardType::Multiple {
                ui.label("Selecciona todas las respuestas correctas");
            }
            ui.add_space(10.0);

            let width = ui.available_width();
            for row in app.option_rows() {
                let clicked = option_button(ui, &row, width, card_type == CardType::Multiple);
                if clicked && !app.is_answered() {
                    match card_type {
                        CardType::Single => {
                            if let Err(e) = app.choose_single(row.index) {
                                app.message = format!("⚠ {e}");
                            }
                        }
                        CardType::Multiple => app.toggle_option(row.index),
                    }
                }
                ui.add_space(4.0);
            }

            if card_type == CardType::Multiple && app.can_check() {
                ui.add_space(6.0);
                if ui.button("Verificar respuesta").clicked() {
                    if let Err(e) = app.check_selection() {
                        app.message = format!("⚠ {e}");
                    }
                }
            }

            // ----------- FEEDBACK -----------
            if !app.message.is_empty() {
                ui.add_space(10.0);
                let text = RichText::new(&app.message).strong();
                let text = match app.feedback.as_ref().map(|f| f.is_correct) {
                    Some(true) => text.color(CORRECT_GREEN),
                    Some(false) => text.color(WRONG_RED),
                    None => text,
                };
                ui.label(text);
            }
            if let Some(explanation) = app.explanation() {
                ui.label(format!("💡 {explanation}"));
            }

            ui.add_space(14.0);
            let (prev, next) = two_button_row(
                ui,
                width,
                ("⬅ Anterior", !nav.is_first),
                ("Siguiente ➡", !nav.is_last),
            );
            if prev {
                app.go_previous();
            }
            if next {
                app.go_next();
            }
        });
    });
}
