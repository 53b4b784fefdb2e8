use crate::data::seed_deck;
use crate::deck_json::import_deck;
use crate::model::Flashcard;
use crate::storage::KeyValueStore;

/// Mazo en memoria + su clave en el almacén.
#[derive(Debug, Clone)]
pub struct DeckStore {
    cards: Vec<Flashcard>,
    key: String,
}

impl DeckStore {
    /// Nunca falla: si no hay nada guardado (o no se puede leer) se usa el mazo inicial.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let cards = match store.get(key) {
            Some(json) => match import_deck(&json) {
                Ok(cards) => {
                    log::info!("Cargadas {} flashcards", cards.len());
                    cards
                }
                Err(e) => {
                    log::warn!("Mazo guardado corrupto, se usa el inicial: {e}");
                    seed_deck()
                }
            },
            None => seed_deck(),
        };
        Self {
            cards,
            key: key.to_string(),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        let json = match serde_json::to_string(&self.cards) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("No se pudo serializar el mazo: {e}");
                return;
            }
        };
        if let Err(e) = store.set(&self.key, &json) {
            log::warn!("No se pudo guardar el mazo: {e}");
        }
    }

    /// La tarjeta ya debe venir validada.
    pub fn add(&mut self, card: Flashcard, store: &mut dyn KeyValueStore) {
        self.cards.push(card);
        self.save(store);
    }

    pub fn replace_all(&mut self, cards: Vec<Flashcard>, store: &mut dyn KeyValueStore) {
        self.cards = cards;
        self.save(store);
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerKey;
    use crate::storage::MemoryStore;

    fn card(question: &str) -> Flashcard {
        Flashcard::new(
            question,
            vec!["sí".into(), "no".into()],
            AnswerKey::Single { correct: 0 },
            "",
        )
        .unwrap()
    }

    #[test]
    fn empty_store_falls_back_to_seed_deck() {
        let deck = DeckStore::load(&MemoryStore::new(), "flashcards");
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn corrupt_data_is_treated_as_absent() {
        let store = MemoryStore::new().with_entry("flashcards", "{not json");
        assert_eq!(DeckStore::load(&store, "flashcards").len(), 2);

        let store = MemoryStore::new().with_entry(
            "flashcards",
            r#"[{"question":"q","options":["a"],"correctAnswers":[0],"explanation":"","type":"single"}]"#,
        );
        assert_eq!(DeckStore::load(&store, "flashcards").len(), 2);

        let store = MemoryStore::new()
            .with_entry("flashcards", r#"[["q", ["a", "b"], [1], "", "single"]]"#);
        assert_eq!(DeckStore::load(&store, "flashcards").len(), 2);
    }

    #[test]
    fn add_persists_and_reloads() {
        let mut store = MemoryStore::new();
        let mut deck = DeckStore::load(&store, "flashcards");
        deck.add(card("¿Nueva?"), &mut store);
        deck.add(card("¿Nueva?"), &mut store);

        let reloaded = DeckStore::load(&store, "flashcards");
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.cards(), deck.cards());
    }

    #[test]
    fn replace_all_swaps_the_whole_deck() {
        let mut store = MemoryStore::new();
        let mut deck = DeckStore::load(&store, "flashcards");
        deck.replace_all(vec![card("única")], &mut store);
        assert_eq!(deck.len(), 1);

        let reloaded = DeckStore::load(&store, "flashcards");
        assert_eq!(reloaded.get(0).map(|c| c.question.as_str()), Some("única"));
    }

    #[test]
    fn empty_deck_stays_empty_after_reload() {
        let mut store = MemoryStore::new();
        let mut deck = DeckStore::load(&store, "flashcards");
        deck.replace_all(Vec::new(), &mut store);
        assert!(DeckStore::load(&store, "flashcards").is_empty());
    }
}
