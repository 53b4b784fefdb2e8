use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Single,
    Multiple,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Single => "single",
            CardType::Multiple => "multiple",
        }
    }
}

/// Respuestas correctas de una tarjeta, según su tipo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerKey {
    Single { correct: usize },
    Multiple { correct: BTreeSet<usize> },
}

impl AnswerKey {
    pub fn card_type(&self) -> CardType {
        match self {
            AnswerKey::Single { .. } => CardType::Single,
            AnswerKey::Multiple { .. } => CardType::Multiple,
        }
    }

    pub fn correct_set(&self) -> BTreeSet<usize> {
        match self {
            AnswerKey::Single { correct } => BTreeSet::from([*correct]),
            AnswerKey::Multiple { correct } => correct.clone(),
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        match self {
            AnswerKey::Single { correct } => *correct == option,
            AnswerKey::Multiple { correct } => correct.contains(&option),
        }
    }
}

/// Tarjeta ya validada: al menos 2 opciones, respuestas no vacías y dentro de rango.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FlashcardRecord", into = "FlashcardRecord")]
pub struct Flashcard {
    pub question: String,
    pub options: Vec<String>,
    pub answer: AnswerKey,
    pub explanation: String,
}

impl Flashcard {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: AnswerKey,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if options.len() < 2 {
            return Err(ValidationError::TooFewOptions(options.len()));
        }
        let correct = answer.correct_set();
        if correct.is_empty() {
            return Err(ValidationError::NoCorrectAnswer);
        }
        if let Some(&index) = correct.iter().find(|&&i| i >= options.len()) {
            return Err(ValidationError::AnswerOutOfRange {
                index,
                len: options.len(),
            });
        }
        Ok(Self {
            question: question.into(),
            options,
            answer,
            explanation: explanation.into(),
        })
    }

    pub fn card_type(&self) -> CardType {
        self.answer.card_type()
    }
}

/// Forma de una tarjeta en JSON (almacenamiento y exportación).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlashcardRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<usize>,
    pub explanation: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
}

impl TryFrom<FlashcardRecord> for Flashcard {
    type Error = ValidationError;

    fn try_from(record: FlashcardRecord) -> Result<Self, Self::Error> {
        let correct: BTreeSet<usize> = record.correct_answers.iter().copied().collect();
        let answer = match record.card_type {
            CardType::Single => match correct.len() {
                0 => return Err(ValidationError::NoCorrectAnswer),
                1 => AnswerKey::Single {
                    correct: record.correct_answers[0],
                },
                _ => return Err(ValidationError::TooManyForSingle),
            },
            CardType::Multiple => AnswerKey::Multiple { correct },
        };
        Flashcard::new(record.question, record.options, answer, record.explanation)
    }
}

impl From<Flashcard> for FlashcardRecord {
    fn from(card: Flashcard) -> Self {
        let card_type = card.card_type();
        Self {
            question: card.question,
            options: card.options,
            correct_answers: card.answer.correct_set().into_iter().collect(),
            explanation: card.explanation,
            card_type,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    AddCard,
}

pub const DRAFT_OPTIONS: usize = 4;

/// Estado del formulario "Añadir flashcard".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub question: String,
    pub options: Vec<String>,
    // Paralelo a `options`
    pub correct: Vec<bool>,
    pub explanation: String,
    pub card_type: CardType,
}

impl Default for CardDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new(); DRAFT_OPTIONS],
            correct: vec![false; DRAFT_OPTIONS],
            explanation: String::new(),
            card_type: CardType::Single,
        }
    }
}

impl CardDraft {
    /// Marca/desmarca una opción como correcta. En respuesta única se comporta como radio.
    pub fn set_correct(&mut self, option: usize, checked: bool) {
        if option >= self.correct.len() {
            return;
        }
        if checked && self.card_type == CardType::Single {
            self.correct.iter_mut().for_each(|c| *c = false);
        }
        self.correct[option] = checked;
    }

    pub fn add_option(&mut self) {
        self.options.push(String::new());
        self.correct.push(false);
    }

    pub fn remove_option(&mut self, option: usize) {
        if option < self.options.len() {
            self.options.remove(option);
            self.correct.remove(option);
        }
    }

    pub fn correct_indices(&self) -> Vec<usize> {
        self.correct
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn validate(&self) -> Result<Flashcard, ValidationError> {
        let correct = self.correct_indices();
        if correct.is_empty() {
            return Err(ValidationError::NoCorrectAnswer);
        }
        if self.card_type == CardType::Single && correct.len() > 1 {
            return Err(ValidationError::TooManyForSingle);
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(ValidationError::BlankOption);
        }

        let answer = match self.card_type {
            CardType::Single => AnswerKey::Single {
                correct: correct[0],
            },
            CardType::Multiple => AnswerKey::Multiple {
                correct: correct.into_iter().collect(),
            },
        };
        Flashcard::new(
            self.question.clone(),
            self.options.clone(),
            answer,
            self.explanation.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(card_type: CardType, correct: Vec<usize>) -> FlashcardRecord {
        FlashcardRecord {
            question: "¿?".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answers: correct,
            explanation: String::new(),
            card_type,
        }
    }

    #[test]
    fn record_with_two_answers_is_not_a_single_card() {
        let err = Flashcard::try_from(record(CardType::Single, vec![0, 2])).unwrap_err();
        assert_eq!(err, ValidationError::TooManyForSingle);
    }

    #[test]
    fn record_rejects_out_of_range_and_empty_answers() {
        assert_eq!(
            Flashcard::try_from(record(CardType::Multiple, vec![1, 3])).unwrap_err(),
            ValidationError::AnswerOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(
            Flashcard::try_from(record(CardType::Multiple, vec![])).unwrap_err(),
            ValidationError::NoCorrectAnswer
        );
    }

    #[test]
    fn json_field_names_follow_the_interchange_format() {
        let card = Flashcard::try_from(record(CardType::Multiple, vec![2, 0])).unwrap();
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["type"], "multiple");
        assert_eq!(value["correctAnswers"], serde_json::json!([0, 2]));
        assert!(value.get("answer").is_none());
    }

    #[test]
    fn single_draft_behaves_like_radio_buttons() {
        let mut draft = CardDraft::default();
        draft.set_correct(0, true);
        draft.set_correct(2, true);
        assert_eq!(draft.correct_indices(), vec![2]);

        draft.card_type = CardType::Multiple;
        draft.set_correct(3, true);
        assert_eq!(draft.correct_indices(), vec![2, 3]);
    }

    #[test]
    fn draft_validation_order() {
        let mut draft = CardDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::NoCorrectAnswer));

        draft.correct = vec![true, true, false, false];
        assert_eq!(draft.validate(), Err(ValidationError::TooManyForSingle));

        draft.card_type = CardType::Multiple;
        draft.options = vec!["a".into(), " ".into(), "c".into(), "d".into()];
        assert_eq!(draft.validate(), Err(ValidationError::BlankOption));

        draft.options[1] = "b".into();
        let card = draft.validate().unwrap();
        assert_eq!(
            card.answer,
            AnswerKey::Multiple {
                correct: BTreeSet::from([0, 1])
            }
        );
    }

    #[test]
    fn removing_options_keeps_marks_aligned() {
        let mut draft = CardDraft::default();
        draft.card_type = CardType::Multiple;
        draft.set_correct(3, true);
        draft.remove_option(1);
        assert_eq!(draft.options.len(), 3);
        assert_eq!(draft.correct_indices(), vec![2]);
    }
}
