use super::*;

impl QuizApp {
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            correct: self.stats.correct(),
            incorrect: self.stats.incorrect(),
            total: self.stats.total(),
        }
    }

    pub fn nav_snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            index: self.nav.current(),
            length: self.nav.len(),
            is_first: self.nav.is_first(),
            is_last: self.nav.is_last(),
        }
    }

    /// Opciones de la tarjeta actual listas para pintar.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let Some(card) = self.current_card() else {
            return Vec::new();
        };
        card.options
            .iter()
            .enumerate()
            .map(|(index, text)| OptionRow {
                index,
                text: text.clone(),
                selected: self.selected.contains(&index),
                mark: self.feedback.as_ref().map(|f| f.mark(index)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grader::OptionMark;
    use crate::storage::MemoryStore;

    #[test]
    fn rows_show_marks_only_after_grading() {
        let mut app = QuizApp::new(AppConfig::default(), Box::new(MemoryStore::new()));
        assert!(app.option_rows().iter().all(|r| r.mark.is_none()));

        app.choose_single(2).unwrap();
        let marks: Vec<_> = app.option_rows().into_iter().map(|r| r.mark).collect();
        assert_eq!(
            marks,
            vec![
                Some(OptionMark::Neutral),
                Some(OptionMark::Correct),
                Some(OptionMark::Wrong),
                Some(OptionMark::Neutral),
            ]
        );
    }

    #[test]
    fn snapshot_labels() {
        let app = QuizApp::new(AppConfig::default(), Box::new(MemoryStore::new()));
        assert_eq!(app.nav_snapshot().label(), "Flashcard 1 de 2");
        assert!(app.nav_snapshot().is_first);
        assert_eq!(app.stats_snapshot().total, 0);
    }
}
