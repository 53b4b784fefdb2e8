use crate::grader::GradeResult;
use crate::storage::KeyValueStore;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct StatsRecord {
    correct_answers: u32,
    incorrect_answers: u32,
}

impl StatsRecord {
    /// Cada campo ausente, nulo o de otro tipo vale 0 por separado.
    fn from_object(object: &Map<String, Value>) -> Self {
        let counter = |field: &str| {
            object
                .get(field)
                .and_then(Value::as_u64)
                .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
        };
        Self {
            correct_answers: counter("correctAnswers"),
            incorrect_answers: counter("incorrectAnswers"),
        }
    }
}

/// Contadores de aciertos/fallos. Se guardan siempre los dos juntos.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    correct: u32,
    incorrect: u32,
    key: String,
}

impl StatsTracker {
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let record = store
            .get(key)
            .and_then(|json| match serde_json::from_str::<Value>(&json) {
                Ok(Value::Object(object)) => Some(StatsRecord::from_object(&object)),
                Ok(other) => {
                    log::warn!("Estadísticas guardadas no son un objeto, se reinician: {other}");
                    None
                }
                Err(e) => {
                    log::warn!("Estadísticas guardadas inválidas, se reinician: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            correct: record.correct_answers,
            incorrect: record.incorrect_answers,
            key: key.to_string(),
        }
    }

    fn save(&self, store: &mut dyn KeyValueStore) {
        let record = StatsRecord {
            correct_answers: self.correct,
            incorrect_answers: self.incorrect,
        };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = store.set(&self.key, &json) {
                    log::warn!("No se pudieron guardar las estadísticas: {e}");
                }
            }
            Err(e) => log::warn!("No se pudieron serializar las estadísticas: {e}"),
        }
    }

    pub fn record_correct(&mut self, store: &mut dyn KeyValueStore) {
        self.correct = self.correct.saturating_add(1);
        self.save(store);
    }

    pub fn record_incorrect(&mut self, store: &mut dyn KeyValueStore) {
        self.incorrect = self.incorrect.saturating_add(1);
        self.save(store);
    }

    pub fn record(&mut self, result: &GradeResult, store: &mut dyn KeyValueStore) {
        if result.is_correct {
            self.record_correct(store);
        } else {
            self.record_incorrect(store);
        }
    }

    pub fn reset(&mut self, store: &mut dyn KeyValueStore) {
        self.correct = 0;
        self.incorrect = 0;
        self.save(store);
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn total(&self) -> u64 {
        u64::from(self.correct) + u64::from(self.incorrect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_or_invalid_stats_start_at_zero() {
        let stats = StatsTracker::load(&MemoryStore::new(), "flashcardStats");
        assert_eq!((stats.correct(), stats.incorrect()), (0, 0));

        let store = MemoryStore::new().with_entry("flashcardStats", "[1, 2]");
        let stats = StatsTracker::load(&store, "flashcardStats");
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn missing_field_defaults_to_zero() {
        let store = MemoryStore::new().with_entry("flashcardStats", r#"{"correctAnswers": 3}"#);
        let stats = StatsTracker::load(&store, "flashcardStats");
        assert_eq!((stats.correct(), stats.incorrect()), (3, 0));
    }

    #[test]
    fn null_or_mistyped_field_only_zeroes_itself() {
        let store = MemoryStore::new()
            .with_entry("flashcardStats", r#"{"correctAnswers": 5, "incorrectAnswers": null}"#);
        let stats = StatsTracker::load(&store, "flashcardStats");
        assert_eq!((stats.correct(), stats.incorrect()), (5, 0));

        let store = MemoryStore::new()
            .with_entry("flashcardStats", r#"{"correctAnswers": "7", "incorrectAnswers": 2}"#);
        let stats = StatsTracker::load(&store, "flashcardStats");
        assert_eq!((stats.correct(), stats.incorrect()), (0, 2));
    }

    #[test]
    fn huge_stored_counters_do_not_overflow_the_total() {
        let store = MemoryStore::new().with_entry(
            "flashcardStats",
            r#"{"correctAnswers": 4294967295, "incorrectAnswers": 1}"#,
        );
        let stats = StatsTracker::load(&store, "flashcardStats");
        assert_eq!(stats.correct(), u32::MAX);
        assert_eq!(stats.total(), u64::from(u32::MAX) + 1);

        let store = MemoryStore::new()
            .with_entry("flashcardStats", r#"{"correctAnswers": 99999999999}"#);
        let stats = StatsTracker::load(&store, "flashcardStats");
        assert_eq!(stats.correct(), u32::MAX);
    }

    #[test]
    fn every_change_writes_both_counters() {
        let mut store = MemoryStore::new();
        let mut stats = StatsTracker::load(&store, "flashcardStats");
        stats.record_correct(&mut store);
        stats.record_incorrect(&mut store);
        stats.record_incorrect(&mut store);

        let saved: serde_json::Value =
            serde_json::from_str(&store.get("flashcardStats").unwrap()).unwrap();
        assert_eq!(
            saved,
            serde_json::json!({"correctAnswers": 1, "incorrectAnswers": 2})
        );
        assert_eq!(stats.total(), 3);

        stats.reset(&mut store);
        let reloaded = StatsTracker::load(&store, "flashcardStats");
        assert_eq!(reloaded.total(), 0);
    }
}
