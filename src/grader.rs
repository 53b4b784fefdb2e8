//! Corrección de respuestas. Función pura: no toca estadísticas ni almacenamiento.

use crate::error::GradeError;
use crate::model::{AnswerKey, Flashcard};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(usize),
    Multiple(BTreeSet<usize>),
}

/// Cómo pintar una opción tras corregir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Wrong,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub is_correct: bool,
    /// Todas las correctas (se muestran siempre).
    pub correct_options: BTreeSet<usize>,
    /// Elegidas por el usuario que no eran correctas.
    pub wrong_picks: BTreeSet<usize>,
    /// Correctas que el usuario no eligió.
    pub missed: BTreeSet<usize>,
}

impl GradeResult {
    pub fn mark(&self, option: usize) -> OptionMark {
        if self.correct_options.contains(&option) {
            OptionMark::Correct
        } else if self.wrong_picks.contains(&option) {
            OptionMark::Wrong
        } else {
            OptionMark::Neutral
        }
    }
}

pub fn grade(card: &Flashcard, answer: &Answer) -> Result<GradeResult, GradeError> {
    let result = match (&card.answer, answer) {
        (AnswerKey::Single { correct }, Answer::Single(pick)) => {
            let is_correct = pick == correct;
            GradeResult {
                is_correct,
                correct_options: BTreeSet::from([*correct]),
                wrong_picks: if is_correct {
                    BTreeSet::new()
                } else {
                    BTreeSet::from([*pick])
                },
                missed: if is_correct {
                    BTreeSet::new()
                } else {
                    BTreeSet::from([*correct])
                },
            }
        }
        (AnswerKey::Multiple { correct }, Answer::Multiple(selected)) => {
            if selected.is_empty() {
                return Err(GradeError::EmptySelection);
            }
            let wrong_picks: BTreeSet<usize> = selected.difference(correct).copied().collect();
            let missed: BTreeSet<usize> = correct.difference(selected).copied().collect();
            // Sin crédito parcial: ni sobran ni faltan
            GradeResult {
                is_correct: wrong_picks.is_empty() && missed.is_empty(),
                correct_options: correct.clone(),
                wrong_picks,
                missed,
            }
        }
        (key, _) => {
            return Err(GradeError::AnswerShape {
                expected: key.card_type().as_str(),
            });
        }
    };

    log::debug!(
        "'{}' corregida: {}",
        card.question,
        if result.is_correct { "correcta" } else { "incorrecta" }
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(correct: usize) -> Flashcard {
        Flashcard::new(
            "¿Capital?",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            AnswerKey::Single { correct },
            "porque sí",
        )
        .unwrap()
    }

    fn multiple(correct: &[usize]) -> Flashcard {
        Flashcard::new(
            "¿Planetas?",
            (0..8).map(|i| format!("op {i}")).collect(),
            AnswerKey::Multiple {
                correct: correct.iter().copied().collect(),
            },
            "",
        )
        .unwrap()
    }

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn single_is_correct_only_for_the_key() {
        let card = single(1);
        for pick in 0..6 {
            let result = grade(&card, &Answer::Single(pick)).unwrap();
            assert_eq!(result.is_correct, pick == 1);
            assert_eq!(result.mark(1), OptionMark::Correct);
            if pick != 1 {
                assert_eq!(result.wrong_picks, set(&[pick]));
                assert_eq!(result.missed, set(&[1]));
                assert_eq!(result.mark(pick), OptionMark::Wrong);
            }
        }
    }

    #[test]
    fn multiple_requires_exact_set() {
        let card = multiple(&[0, 2, 5]);

        let exact = grade(&card, &Answer::Multiple(set(&[5, 0, 2]))).unwrap();
        assert!(exact.is_correct);
        assert!(exact.wrong_picks.is_empty() && exact.missed.is_empty());

        let subset = grade(&card, &Answer::Multiple(set(&[0, 2]))).unwrap();
        assert!(!subset.is_correct);
        assert_eq!(subset.missed, set(&[5]));

        let superset = grade(&card, &Answer::Multiple(set(&[0, 2, 5, 7]))).unwrap();
        assert!(!superset.is_correct);
        assert_eq!(superset.wrong_picks, set(&[7]));
        assert_eq!(superset.mark(7), OptionMark::Wrong);
        assert_eq!(superset.mark(5), OptionMark::Correct);
        assert_eq!(superset.mark(3), OptionMark::Neutral);
    }

    #[test]
    fn all_planets_but_one_is_wrong() {
        let card = multiple(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let result = grade(&card, &Answer::Multiple(set(&[0, 1, 2, 3, 4, 5, 6]))).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.missed, set(&[7]));
    }

    #[test]
    fn empty_selection_and_shape_mismatch_are_errors() {
        assert_eq!(
            grade(&multiple(&[1]), &Answer::Multiple(BTreeSet::new())),
            Err(GradeError::EmptySelection)
        );
        assert_eq!(
            grade(&multiple(&[1]), &Answer::Single(1)),
            Err(GradeError::AnswerShape {
                expected: "multiple"
            })
        );
        assert!(matches!(
            grade(&single(0), &Answer::Multiple(set(&[0]))),
            Err(GradeError::AnswerShape { .. })
        ));
    }
}
