// src/deck_json.rs
// Formato de intercambio: lista JSON de flashcards.

use crate::error::ImportError;
use crate::model::Flashcard;
use serde_json::Value;

/// JSON con sangría de 2 espacios.
pub fn export_deck(cards: &[Flashcard]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(cards)
}

/// Rechaza la importación completa en cuanto una tarjeta no es válida.
pub fn import_deck(text: &str) -> Result<Vec<Flashcard>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(ImportError::InvalidCard {
                    index,
                    reason: "la tarjeta no es un objeto JSON".to_string(),
                });
            }
            serde_json::from_value::<Flashcard>(item).map_err(|e| ImportError::InvalidCard {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
