// src/view_models.rs

use crate::grader::OptionMark;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub correct: u32,
    pub incorrect: u32,
    pub total: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSnapshot {
    pub index: Option<usize>, // None con el mazo vacío
    pub length: usize,
    pub is_first: bool,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    pub text: String,
    pub selected: bool,
    pub mark: Option<OptionMark>, // Some(..) tras corregir
}

impl StatsSnapshot {
    pub fn label(&self) -> String {
        format!(
            "✅ {}   ❌ {}   Σ {}",
            self.correct, self.incorrect, self.total
        )
    }
}

impl NavSnapshot {
    pub fn label(&self) -> String {
        match self.index {
            Some(i) => format!("Flashcard {} de {}", i + 1, self.length),
            None => "Sin flashcards".to_string(),
        }
    }
}
