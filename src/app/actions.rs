use super::*;
use crate::error::GradeError;
use crate::grader::{Answer, grade};
use crate::model::CardType;

impl QuizApp {
    /// Corrige la tarjeta actual y suma el resultado a las estadísticas.
    pub fn submit_answer(&mut self, answer: Answer) -> Result<GradeResult, GradeError> {
        if self.is_answered() {
            return Err(GradeError::AlreadyAnswered);
        }
        let card = self.current_card().ok_or(GradeError::NoCard)?;
        let result = grade(card, &answer)?;

        self.stats.record(&result, self.store.as_mut());
        self.message = if result.is_correct {
            "✅ ¡Correcto!".into()
        } else {
            "❌ ¡Incorrecto!".into()
        };
        self.feedback = Some(result.clone());
        Ok(result)
    }

    /// Clic en una opción de una pregunta de respuesta única: se corrige al momento.
    pub fn choose_single(&mut self, option: usize) -> Result<GradeResult, GradeError> {
        self.submit_answer(Answer::Single(option))
    }

    /// Marca/desmarca una opción de respuesta múltiple. Ignorado si ya se corrigió.
    pub fn toggle_option(&mut self, option: usize) {
        if self.is_answered() {
            return;
        }
        let Some(card) = self.current_card() else {
            return;
        };
        if card.card_type() != CardType::Multiple || option >= card.options.len() {
            return;
        }
        if !self.selected.remove(&option) {
            self.selected.insert(option);
        }
    }

    /// "Verificar respuesta" para respuesta múltiple.
    pub fn check_selection(&mut self) -> Result<GradeResult, GradeError> {
        let selection = self.selected.clone();
        self.submit_answer(Answer::Multiple(selection))
    }

    /// Solo tiene sentido ofrecer "Verificar" con algo seleccionado y sin corregir.
    pub fn can_check(&self) -> bool {
        !self.is_answered() && !self.selected.is_empty()
    }
}
