use super::*;
use crate::deck_json::{export_deck, import_deck};
use crate::error::{ImportError, ValidationError};

impl QuizApp {
    /// Valida el borrador y lo añade al final del mazo.
    pub fn add_card(&mut self, draft: &CardDraft) -> Result<(), ValidationError> {
        let card = draft.validate()?;
        log::info!("Nueva flashcard: {}", card.question);
        self.deck.add(card, self.store.as_mut());
        self.nav.clamp_after_mutation(self.deck.len());
        Ok(())
    }

    /// Envío del formulario: añade, limpia el borrador y vuelve al quiz.
    pub fn submit_draft(&mut self) {
        let draft = std::mem::take(&mut self.draft);
        match self.add_card(&draft) {
            Ok(()) => {
                self.state = AppState::Quiz;
                self.message = "¡Flashcard añadida con éxito!".into();
            }
            Err(e) => {
                self.draft = draft;
                self.message = format!("⚠ {e}");
            }
        }
    }

    pub fn close_add_form(&mut self) {
        self.draft = CardDraft::default();
        self.state = AppState::Quiz;
    }

    pub fn export_deck(&self) -> Result<String, serde_json::Error> {
        export_deck(self.deck.cards())
    }

    /// Sustituye el mazo completo. Si falla, nada cambia.
    pub fn import_deck(&mut self, text: &str) -> Result<usize, ImportError> {
        let cards = import_deck(text)?;
        let count = cards.len();
        self.deck.replace_all(cards, self.store.as_mut());
        self.nav.clamp_after_mutation(count);
        self.nav.reset();
        self.on_card_changed();
        log::info!("Importadas {count} flashcards");
        Ok(count)
    }

    /// Igual que `import_deck`, pero deja el resultado en `message` para la UI.
    pub fn apply_import(&mut self, text: &str) {
        match self.import_deck(text) {
            Ok(count) => self.message = format!("¡{count} flashcards importadas con éxito!"),
            Err(e) => {
                log::warn!("Importación rechazada ({}): {e}", e.kind());
                self.message = format!("⚠ {e}");
            }
        }
    }
}
