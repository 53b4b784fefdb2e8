use super::*;
use crate::model::Flashcard;

impl QuizApp {
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.nav.current().and_then(|i| self.deck.get(i))
    }

    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    pub fn explanation(&self) -> Option<&str> {
        self.feedback
            .as_ref()
            .and(self.current_card())
            .map(|card| card.explanation.as_str())
    }
}
