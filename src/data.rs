// src/data.rs

use crate::model::Flashcard;

/// Mazo inicial embebido (YAML)
pub fn seed_deck() -> Vec<Flashcard> {
    let file_content = include_str!("data/seed_deck.yaml");
    serde_yaml::from_str(file_content).unwrap_or_else(|e| {
        log::error!("No se pudo parsear el mazo inicial: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerKey, CardType};

    #[test]
    fn seed_deck_has_one_card_of_each_type() {
        let deck = seed_deck();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].answer, AnswerKey::Single { correct: 1 });
        assert_eq!(deck[1].card_type(), CardType::Multiple);
        assert_eq!(deck[1].answer.correct_set().len(), 8);
    }
}
