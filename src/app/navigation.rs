use super::*;

impl QuizApp {
    /// Siguiente flashcard (desde la última vuelve a la primera).
    pub fn go_next(&mut self) {
        self.nav.next();
        self.on_card_changed();
    }

    /// Flashcard anterior (desde la primera salta a la última).
    pub fn go_previous(&mut self) {
        self.nav.previous();
        self.on_card_changed();
    }
}
