use super::*;

impl QuizApp {
    /// Pone a cero aciertos y fallos y vuelve a la primera flashcard.
    pub fn reset_stats(&mut self) {
        self.stats.reset(self.store.as_mut());
        self.nav.reset();
        self.on_card_changed();
        self.confirm_reset = false;
        log::info!("Estadísticas reiniciadas");
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres poner a cero las estadísticas?");
                ui.horizontal(|ui| {
                    if ui.button("Sí, reiniciar").clicked() {
                        self.reset_stats();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
